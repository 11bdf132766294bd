//! Animated lock-icon overlay for X11 screen lockers.
//!
//! Pure helpers live here; window-system code is confined to
//! `platform::x11` so the drawing logic can be tested without a display.

pub mod error;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod storage;
pub mod ui;

#[cfg(unix)]
pub mod platform;

// Re-export model types for convenience
pub use model::{FadeTimer, PackedColor, SurfaceDescriptor};

// Re-export event types for convenience
pub use events::{CoverEvent, EventBus, EventPublisher};

pub use error::{CoverError, DrawError};
pub use handlers::{Action, Dispatcher};
pub use storage::CoverConfig;

/// Format a packed colour as `#RRGGBBAA`.
pub fn color_to_hex(color: PackedColor) -> String {
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        color.red(),
        color.green(),
        color.blue(),
        color.alpha()
    )
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a packed colour; a missing alpha
/// byte means opaque.
pub fn parse_hex_color(s: &str) -> Option<PackedColor> {
    let t = s.trim();
    let t = t.strip_prefix('#').unwrap_or(t);
    let hex = t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let word = match hex.len() {
        6 => (u32::from_str_radix(&hex, 16).ok()? << 8) | 0xFF,
        8 => u32::from_str_radix(&hex, 16).ok()?,
        _ => return None,
    };
    Some(PackedColor(word))
}
