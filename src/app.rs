// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer and the
//! gallery.
//!
//! The `App` struct wires keyboard and mouse events to the session and the
//! thumbnail store, and translates messages into side effects like folder
//! scanning, image decoding, deletion, and config persistence. Decoding
//! runs as tasks so the UI stays responsive; completions carry the path
//! (viewer) or generation (gallery) so stale results are discarded.

use crate::config::{self, SortOrder, ThemeMode};
use crate::error::Error;
use crate::font;
use crate::media::{self, ImageData};
use crate::session::Session;
use crate::thumbnails::{ThumbnailStore, THUMBNAIL_MAX_DIM};
use crate::ui::{gallery, jump_dialog, viewer};
use iced::widget::scrollable::Viewport;
use iced::widget::{image, Stack};
use iced::{event, keyboard, window, Element, Subscription, Task, Theme};
use std::path::{Path, PathBuf};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

/// Views the user can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Viewer,
    Gallery,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional folder to open on startup.
    pub folder: Option<PathBuf>,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    OpenFolderDialog,
    FolderPicked(Option<PathBuf>),
    SessionOpened(Result<Session, Error>),
    /// Full-size decode finished; `path` identifies which entry it was for
    /// so completions for superseded entries are dropped.
    ImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    NavigateNext,
    NavigatePrevious,
    DeleteCurrent,
    UndoDelete,
    OpenJumpDialog,
    JumpInputChanged(String),
    JumpSubmit,
    CloseJumpDialog,
    OpenGallery,
    CloseGallery,
    /// A thumbnail was activated in the gallery.
    OpenThumbnail(usize),
    GalleryScrolled(Viewport),
    /// Wheel event in the gallery; another trigger for batch loading.
    LoadMoreThumbnails,
    ThumbnailBatchLoaded {
        generation: u64,
        results: Vec<(PathBuf, Option<image::Handle>)>,
    },
    /// The error dialog was acknowledged; nothing to do.
    ErrorDialogClosed,
}

/// Root application state.
pub struct App {
    session: Option<Session>,
    screen: Screen,
    thumbnails: ThumbnailStore,
    /// Decoded image for the current entry, if the decode has completed.
    current_image: Option<ImageData>,
    /// Decode failure for the current entry; rendered as a placeholder.
    decode_error: Option<String>,
    status: String,
    /// `Some` while the jump dialog is open; holds the typed input.
    jump_input: Option<String>,
    sort_order: SortOrder,
    theme_mode: ThemeMode,
    last_folder: Option<PathBuf>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            session: None,
            screen: Screen::Viewer,
            thumbnails: ThumbnailStore::new(),
            current_image: None,
            decode_error: None,
            status: String::from("Pick a folder to begin"),
            jump_input: None,
            sort_order: SortOrder::default(),
            theme_mode: ThemeMode::default(),
            last_folder: None,
        }
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let mut application = iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .default_font(font::default_font());

    if let Some(bytes) = font::embedded_font() {
        application = application.font(bytes);
    }

    application.run_with(move || App::new(flags))
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let mut app = App {
            sort_order: config.sort_order.unwrap_or_default(),
            theme_mode: config.theme_mode.unwrap_or_default(),
            last_folder: config.last_folder,
            ..Self::default()
        };

        let task = if let Some(folder) = flags.folder {
            app.status = format!("Opening {}...", folder.display());
            open_session_task(folder, app.sort_order)
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        String::from("PicCull")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.jump_input.is_some() {
            event::listen_with(dialog_events)
        } else {
            match self.screen {
                Screen::Viewer => event::listen_with(viewer_events),
                Screen::Gallery => event::listen_with(gallery_events),
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFolderDialog => {
                let start_dir = self.last_folder.clone();
                Task::perform(
                    async move {
                        let mut dialog =
                            rfd::AsyncFileDialog::new().set_title("Select image folder");
                        if let Some(dir) = start_dir {
                            if dir.exists() {
                                dialog = dialog.set_directory(&dir);
                            }
                        }
                        dialog.pick_folder().await.map(|h| h.path().to_path_buf())
                    },
                    Message::FolderPicked,
                )
            }
            Message::FolderPicked(None) => Task::none(),
            Message::FolderPicked(Some(folder)) => {
                self.last_folder = Some(folder.clone());
                self.persist_config();
                self.status = format!("Opening {}...", folder.display());
                open_session_task(folder, self.sort_order)
            }
            Message::SessionOpened(Ok(session)) => {
                self.thumbnails.invalidate();
                self.current_image = None;
                self.decode_error = None;
                self.jump_input = None;
                self.screen = Screen::Viewer;
                self.status = if session.is_empty() {
                    String::from("No images found")
                } else {
                    current_file_status(&session)
                };
                self.session = Some(session);
                self.load_current()
            }
            Message::SessionOpened(Err(error)) => {
                // Invalid folder: report and leave the previous state alone.
                eprintln!("Failed to open folder: {error}");
                self.report_error(error.to_string())
            }
            Message::ImageLoaded { path, result } => {
                let current = self
                    .session
                    .as_ref()
                    .and_then(|s| s.current_path())
                    .map(Path::to_path_buf);
                if current.as_deref() != Some(path.as_path()) {
                    // Superseded by further navigation; drop it.
                    return Task::none();
                }
                match result {
                    Ok(data) => {
                        self.current_image = Some(data);
                        self.decode_error = None;
                    }
                    Err(error) => {
                        eprintln!("Failed to decode {}: {error}", path.display());
                        self.current_image = None;
                        self.decode_error = Some(error.to_string());
                    }
                }
                Task::none()
            }
            Message::NavigateNext => {
                if let Some(session) = &mut self.session {
                    if session.next() {
                        self.status = current_file_status(session);
                        return self.load_current();
                    }
                }
                Task::none()
            }
            Message::NavigatePrevious => {
                if let Some(session) = &mut self.session {
                    if session.previous() {
                        self.status = current_file_status(session);
                        return self.load_current();
                    }
                }
                Task::none()
            }
            Message::DeleteCurrent => self.delete_current(),
            Message::UndoDelete => self.undo_delete(),
            Message::OpenJumpDialog => {
                let has_images = self.session.as_ref().is_some_and(|s| !s.is_empty());
                if has_images && self.jump_input.is_none() {
                    self.jump_input = Some(String::new());
                }
                Task::none()
            }
            Message::JumpInputChanged(input) => {
                if self.jump_input.is_some() {
                    self.jump_input = Some(input);
                }
                Task::none()
            }
            Message::JumpSubmit => {
                let Some(input) = self.jump_input.clone() else {
                    return Task::none();
                };
                let Some(session) = &mut self.session else {
                    return Task::none();
                };
                match parse_jump_input(&input, session.len()) {
                    Some(index) => {
                        session.jump_to(index);
                        self.jump_input = None;
                        self.status = current_file_status(session);
                        self.load_current()
                    }
                    // Rejected: the dialog stays open, no transition.
                    None => Task::none(),
                }
            }
            Message::CloseJumpDialog => {
                self.jump_input = None;
                Task::none()
            }
            Message::OpenGallery => {
                if self.session.as_ref().is_some_and(|s| !s.is_empty()) {
                    self.screen = Screen::Gallery;
                    return self.request_thumbnail_batch();
                }
                Task::none()
            }
            Message::CloseGallery => {
                self.screen = Screen::Viewer;
                Task::none()
            }
            Message::OpenThumbnail(index) => {
                if let Some(session) = &mut self.session {
                    if session.jump_to(index) {
                        self.screen = Screen::Viewer;
                        self.status = current_file_status(session);
                        return self.load_current();
                    }
                }
                Task::none()
            }
            Message::GalleryScrolled(viewport) => {
                if viewport.relative_offset().y >= gallery::NEAR_BOTTOM {
                    return self.request_thumbnail_batch();
                }
                Task::none()
            }
            Message::LoadMoreThumbnails => self.request_thumbnail_batch(),
            Message::ThumbnailBatchLoaded {
                generation,
                results,
            } => {
                self.thumbnails.complete_batch(generation, results);
                Task::none()
            }
            Message::ErrorDialogClosed => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let base: Element<'_, Message> = match (&self.session, self.screen) {
            (Some(session), Screen::Gallery) => gallery::view(
                session.images(),
                &self.thumbnails,
                session.current_index(),
            ),
            (session, Screen::Viewer) | (session @ None, _) => {
                viewer::view(viewer::ViewModel {
                    image: self.current_image.as_ref(),
                    decode_error: self.decode_error.as_deref(),
                    current_index: session.as_ref().and_then(|s| s.current_index()),
                    total: session.as_ref().map_or(0, |s| s.len()),
                    status: &self.status,
                    has_folder: session.is_some(),
                    can_undo: session.as_ref().is_some_and(|s| s.has_undo()),
                })
            }
        };

        match &self.jump_input {
            Some(input) => {
                let total = self.session.as_ref().map_or(0, |s| s.len());
                Stack::new()
                    .push(base)
                    .push(jump_dialog::view(input, total))
                    .into()
            }
            None => base,
        }
    }

    /// Kicks off a decode of the current entry. Called on every transition
    /// into a new position.
    fn load_current(&mut self) -> Task<Message> {
        let Some(path) = self
            .session
            .as_ref()
            .and_then(|s| s.current_path())
            .map(Path::to_path_buf)
        else {
            self.current_image = None;
            self.decode_error = None;
            return Task::none();
        };

        Task::perform(
            async move {
                let result = media::load_image(&path);
                (path, result)
            },
            |(path, result)| Message::ImageLoaded { path, result },
        )
    }

    fn delete_current(&mut self) -> Task<Message> {
        let Some(session) = &mut self.session else {
            return Task::none();
        };

        match session.delete_current() {
            Ok(Some(destination)) => {
                let moved = trash_display(session.folder(), &destination);
                if session.is_empty() {
                    self.current_image = None;
                    self.decode_error = None;
                    self.status = format!("Moved to {moved} | No images left");
                    Task::none()
                } else {
                    self.status = format!("{} | Moved to {moved}", current_file_status(session));
                    self.load_current()
                }
            }
            Ok(None) => Task::none(),
            Err(error) => {
                // Session state is untouched; the user can retry or move on.
                eprintln!("Failed to move file: {error}");
                self.report_error(error.to_string())
            }
        }
    }

    fn undo_delete(&mut self) -> Task<Message> {
        let Some(session) = &mut self.session else {
            return Task::none();
        };

        match session.undo_delete() {
            Ok(Some(_)) => {
                self.status = format!("Restored | {}", current_file_status(session));
                self.load_current()
            }
            Ok(None) => {
                self.status = String::from("Nothing to undo");
                Task::none()
            }
            Err(error) => {
                // Recoverable: reported, never fatal.
                eprintln!("Failed to undo: {error}");
                self.report_error(error.to_string())
            }
        }
    }

    /// Claims and runs the next thumbnail batch, if one is due. Re-entrant
    /// triggers are coalesced by the store.
    fn request_thumbnail_batch(&mut self) -> Task<Message> {
        let Some(session) = &self.session else {
            return Task::none();
        };
        let Some((generation, batch)) = self.thumbnails.next_batch(session.images()) else {
            return Task::none();
        };

        Task::perform(
            async move {
                batch
                    .into_iter()
                    .map(|path| {
                        let handle = match media::load_thumbnail(&path, THUMBNAIL_MAX_DIM) {
                            Ok(handle) => Some(handle),
                            Err(error) => {
                                eprintln!(
                                    "Failed to thumbnail {}: {error}",
                                    path.display()
                                );
                                None
                            }
                        };
                        (path, handle)
                    })
                    .collect::<Vec<_>>()
            },
            move |results| Message::ThumbnailBatchLoaded {
                generation,
                results,
            },
        )
    }

    /// Puts `message` in the status bar and raises a native error dialog.
    /// Every failure is recoverable, so this is the only error surface.
    fn report_error(&mut self, message: String) -> Task<Message> {
        self.status = message.clone();

        Task::perform(
            async move {
                rfd::AsyncMessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title("PicCull")
                    .set_description(message)
                    .show()
                    .await;
            },
            |_| Message::ErrorDialogClosed,
        )
    }

    fn persist_config(&self) {
        let config = config::Config {
            sort_order: Some(self.sort_order),
            theme_mode: Some(self.theme_mode),
            last_folder: self.last_folder.clone(),
        };
        if let Err(error) = config::save(&config) {
            eprintln!("Failed to save preferences: {error}");
        }
    }
}

fn open_session_task(folder: PathBuf, sort_order: SortOrder) -> Task<Message> {
    Task::perform(
        async move { Session::open(&folder, sort_order) },
        Message::SessionOpened,
    )
}

/// Status line for the current position, mirroring the counter.
fn current_file_status(session: &Session) -> String {
    match (session.current_index(), session.current_path()) {
        (Some(index), Some(path)) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("{}/{} - {}", index + 1, session.len(), name)
        }
        _ => String::from("No images found"),
    }
}

/// Friendly path for the "moved to" status: relative to the open folder
/// when possible.
fn trash_display(folder: &Path, destination: &Path) -> String {
    destination
        .strip_prefix(folder)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| {
            destination
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
}

/// Parses 1-based jump dialog input against the sequence length, returning
/// the 0-based index. Non-numeric or out-of-range input is rejected.
fn parse_jump_input(input: &str, len: usize) -> Option<usize> {
    let value: usize = input.trim().parse().ok()?;
    if value >= 1 && value <= len {
        Some(value - 1)
    } else {
        None
    }
}

fn viewer_events(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }

    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match key {
                keyboard::Key::Named(keyboard::key::Named::ArrowRight)
                | keyboard::Key::Named(keyboard::key::Named::Enter)
                | keyboard::Key::Named(keyboard::key::Named::Space) => {
                    Some(Message::NavigateNext)
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    Some(Message::NavigatePrevious)
                }
                keyboard::Key::Named(keyboard::key::Named::Delete) => {
                    Some(Message::DeleteCurrent)
                }
                keyboard::Key::Named(keyboard::key::Named::Tab) => Some(Message::OpenGallery),
                keyboard::Key::Character(ref c) if c.as_str() == "z" && modifiers.command() => {
                    Some(Message::UndoDelete)
                }
                _ => None,
            }
        }
        _ => None,
    }
}

fn gallery_events(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    // Wheel events double as load-more triggers even when the scrollable
    // consumed them.
    if matches!(
        event,
        event::Event::Mouse(iced::mouse::Event::WheelScrolled { .. })
    ) {
        return Some(Message::LoadMoreThumbnails);
    }

    if status == event::Status::Captured {
        return None;
    }

    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match key {
                keyboard::Key::Named(keyboard::key::Named::Escape)
                | keyboard::Key::Named(keyboard::key::Named::Tab) => {
                    Some(Message::CloseGallery)
                }
                keyboard::Key::Character(ref c) if c.as_str() == "z" && modifiers.command() => {
                    Some(Message::UndoDelete)
                }
                _ => None,
            }
        }
        _ => None,
    }
}

fn dialog_events(
    event: event::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    // Enter is handled by the text input's on_submit; Escape always closes.
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::CloseJumpDialog),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn failed_folder_open_reports_and_leaves_state_alone() {
        let mut app = App::default();

        let _task = app.update(Message::SessionOpened(Err(Error::Io(
            "not a directory: /nope".into(),
        ))));

        assert!(app.session.is_none());
        assert_eq!(app.screen, Screen::Viewer);
        assert!(app.status.contains("not a directory"));
    }

    #[test]
    fn failed_delete_reports_and_keeps_the_session_usable() {
        let dir = tempdir().expect("failed to create temp dir");
        for name in ["a.jpg", "b.jpg"] {
            fs::write(dir.path().join(name), b"fake image data").unwrap();
        }
        let mut app = App::default();
        app.session =
            Some(Session::open(dir.path(), SortOrder::Alphabetical).expect("open should succeed"));

        // The file disappears behind the session's back, so the move fails.
        fs::remove_file(dir.path().join("a.jpg")).unwrap();
        let _task = app.update(Message::DeleteCurrent);

        let session = app.session.as_ref().expect("session survives");
        assert_eq!(session.len(), 2);
        assert_eq!(session.current_index(), Some(0));
        assert!(app.status.contains("Move Error"));
    }

    #[test]
    fn acknowledging_the_error_dialog_changes_nothing() {
        let mut app = App::default();
        let before = app.status.clone();

        let _task = app.update(Message::ErrorDialogClosed);

        assert_eq!(app.status, before);
    }

    #[test]
    fn jump_input_accepts_values_inside_the_counter_range() {
        assert_eq!(parse_jump_input("1", 10), Some(0));
        assert_eq!(parse_jump_input("10", 10), Some(9));
        assert_eq!(parse_jump_input(" 3 ", 10), Some(2));
    }

    #[test]
    fn jump_input_rejects_out_of_range_values() {
        assert_eq!(parse_jump_input("0", 10), None);
        assert_eq!(parse_jump_input("11", 10), None);
        assert_eq!(parse_jump_input("1", 0), None);
    }

    #[test]
    fn jump_input_rejects_non_numeric_values() {
        assert_eq!(parse_jump_input("", 10), None);
        assert_eq!(parse_jump_input("abc", 10), None);
        assert_eq!(parse_jump_input("-1", 10), None);
        assert_eq!(parse_jump_input("2.5", 10), None);
    }

    #[test]
    fn trash_display_prefers_path_relative_to_folder() {
        let folder = Path::new("/photos/shoot");
        let destination = Path::new("/photos/shoot/.deleted/a.jpg");
        assert_eq!(trash_display(folder, destination), ".deleted/a.jpg");
    }

    #[test]
    fn trash_display_falls_back_to_file_name() {
        let folder = Path::new("/photos/shoot");
        let destination = Path::new("/elsewhere/.deleted/a.jpg");
        assert_eq!(trash_display(folder, destination), "a.jpg");
    }
}
