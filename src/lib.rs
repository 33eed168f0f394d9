// SPDX-License-Identifier: MPL-2.0
//! PicCull: a keyboard-driven photo culling tool.
//!
//! Point it at a folder of images, step through them, and press Delete to
//! move rejects into a `.deleted` folder next to the originals. Nothing is
//! ever destroyed outright, and the last deletion can be undone.

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod font;
pub mod media;
pub mod session;
pub mod thumbnails;
pub mod trash;
pub mod ui;

pub use error::{Error, Result};
