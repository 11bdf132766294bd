//! Error types.
//!
//! [`DrawError`] covers the draw controller's contract; [`CoverError`] covers
//! window setup and the window-system connection.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A context slot that must be filled by INIT before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Canvas,
    Surface,
    Display,
    Window,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Canvas => "drawing handle",
            Slot::Surface => "surface descriptor",
            Slot::Display => "display connection",
            Slot::Window => "window handle",
        };
        f.write_str(name)
    }
}

/// Errors raised while applying a draw request.
#[derive(Debug, Error)]
pub enum DrawError {
    /// A request needed a slot that INIT never filled.
    #[error("{0} used before initialisation")]
    Uninitialized(Slot),
    /// The window system rejected a clear or present.
    #[error("window system request failed: {0}")]
    Backend(String),
}

/// Errors raised while creating or driving the overlay window.
#[derive(Debug, Error)]
pub enum CoverError {
    #[error("lock image {path:?} could not be read: {source}")]
    LockImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("lock image {0:?} has an unsupported size")]
    LockImageSize(PathBuf),

    #[error("screen {0} does not offer a 32-bit TrueColor visual")]
    NoArgbVisual(usize),

    #[error("screen {0} does not exist")]
    NoScreen(usize),

    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error(transparent)]
    Draw(#[from] DrawError),

    #[cfg(unix)]
    #[error(transparent)]
    Connection(#[from] x11rb::errors::ConnectionError),

    #[cfg(unix)]
    #[error(transparent)]
    Reply(#[from] x11rb::errors::ReplyError),

    #[cfg(unix)]
    #[error(transparent)]
    ReplyOrId(#[from] x11rb::errors::ReplyOrIdError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_names() {
        assert_eq!(Slot::Canvas.to_string(), "drawing handle");
        assert_eq!(Slot::Surface.to_string(), "surface descriptor");
        assert_eq!(Slot::Display.to_string(), "display connection");
        assert_eq!(Slot::Window.to_string(), "window handle");
    }

    #[test]
    fn test_uninitialized_message() {
        let e = DrawError::Uninitialized(Slot::Surface);
        assert_eq!(e.to_string(), "surface descriptor used before initialisation");
    }
}
