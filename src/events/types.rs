//! Overlay events, independent of the window system.
//!
//! The platform layer translates native events into [`CoverEvent`]s and the
//! fade schedule contributes [`CoverEvent::Tick`]; both travel through the
//! same queue to the dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Events handled by the overlay dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverEvent {
    // === Window Events ===
    /// The window manager asked the window to close (WM_DELETE_WINDOW).
    CloseRequested,

    /// Part of the window was exposed and must be repainted.
    Expose,

    /// The window was resized or moved.
    Configure { width: u32, height: u32 },

    /// The server's keyboard mapping changed.
    KeymapChanged,

    /// A key went down.
    KeyPress { keycode: u8 },

    // === Timer Events ===
    /// The periodic fade tick is due.
    Tick,

    /// Anything the overlay does not react to.
    Ignored,
}

impl CoverEvent {
    /// Returns true if this event restarts the fade countdown.
    pub fn arms_fade(&self) -> bool {
        matches!(self, CoverEvent::KeyPress { .. })
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            CoverEvent::CloseRequested => "Close requested",
            CoverEvent::Expose => "Window exposed",
            CoverEvent::Configure { .. } => "Window reconfigured",
            CoverEvent::KeymapChanged => "Keyboard mapping changed",
            CoverEvent::KeyPress { .. } => "Key pressed",
            CoverEvent::Tick => "Fade tick",
            CoverEvent::Ignored => "Ignored event",
        }
    }
}
