// SPDX-License-Identifier: MPL-2.0
//! UI composition: the viewer pane, the thumbnail gallery, the jump dialog
//! overlay, and the shared monochrome styling.

pub mod design_tokens;
pub mod gallery;
pub mod jump_dialog;
pub mod styles;
pub mod viewer;
