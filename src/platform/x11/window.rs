//! Overlay window creation.
//!
//! The window covers the whole screen (one extra row, starting at y = -1),
//! uses a 32-bit TrueColor visual so the background can be transparent, and
//! asks the window manager to keep it above other windows.

use tracing::{debug, warn};
use x11rb::connection::{Connection, RequestConnection};
use x11rb::protocol::shape::{self, ConnectionExt as _, SK, SO};
use x11rb::protocol::xproto::{
    AtomEnum, ClipOrdering, Colormap, ColormapAlloc, ConnectionExt as _, CreateWindowAux,
    EventMask, PropMode, Screen, VisualClass, Visualid, Window, WindowClass,
};
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use super::atoms::CoverAtoms;
use crate::error::CoverError;
use crate::model::constants::WINDOW_NAME;

/// Depth of the ARGB visual the overlay needs.
pub const ARGB_DEPTH: u8 = 32;

/// Handles created for the overlay window.
#[derive(Debug, Clone, Copy)]
pub struct CoverWindow {
    pub window: Window,
    pub colormap: Colormap,
    pub visual: Visualid,
    pub depth: u8,
    pub width: u16,
    pub height: u16,
    pub atoms: CoverAtoms,
}

/// First 32-bit TrueColor visual offered by `screen`.
pub fn find_argb_visual(screen: &Screen) -> Option<Visualid> {
    screen
        .allowed_depths
        .iter()
        .filter(|d| d.depth == ARGB_DEPTH)
        .flat_map(|d| d.visuals.iter())
        .find(|v| v.class == VisualClass::TRUE_COLOR)
        .map(|v| v.visual_id)
}

/// Create (but do not map) the overlay window on `screen_num`.
pub fn create_cover_window(
    conn: &RustConnection,
    screen_num: usize,
    input_passthrough: bool,
) -> Result<CoverWindow, CoverError> {
    let screen = conn
        .setup()
        .roots
        .get(screen_num)
        .ok_or(CoverError::NoScreen(screen_num))?;
    let visual = find_argb_visual(screen).ok_or(CoverError::NoArgbVisual(screen_num))?;

    let width = screen.width_in_pixels;
    let height = screen.height_in_pixels.saturating_add(1);

    let atoms = CoverAtoms::new(conn)?.reply()?;

    let colormap = conn.generate_id()?;
    conn.create_colormap(ColormapAlloc::NONE, colormap, screen.root, visual)?;

    let window = conn.generate_id()?;
    let aux = CreateWindowAux::new()
        .colormap(colormap)
        .border_pixel(0)
        .background_pixel(0)
        .event_mask(
            EventMask::BUTTON_PRESS
                | EventMask::STRUCTURE_NOTIFY
                | EventMask::EXPOSURE
                | EventMask::KEY_PRESS
                | EventMask::KEY_RELEASE
                | EventMask::KEYMAP_STATE,
        );
    conn.create_window(
        ARGB_DEPTH,
        window,
        screen.root,
        0,
        -1,
        width,
        height,
        0,
        WindowClass::INPUT_OUTPUT,
        visual,
        &aux,
    )?;

    conn.change_property32(
        PropMode::REPLACE,
        window,
        atoms.WM_PROTOCOLS,
        AtomEnum::ATOM,
        &[atoms.WM_DELETE_WINDOW],
    )?;
    conn.change_property8(
        PropMode::REPLACE,
        window,
        AtomEnum::WM_NAME,
        AtomEnum::STRING,
        WINDOW_NAME.as_bytes(),
    )?;
    // WM_CLASS is "instance\0class\0"
    let class = format!("{0}\0{0}\0", WINDOW_NAME);
    conn.change_property8(
        PropMode::REPLACE,
        window,
        AtomEnum::WM_CLASS,
        AtomEnum::STRING,
        class.as_bytes(),
    )?;
    conn.change_property32(
        PropMode::REPLACE,
        window,
        atoms._NET_WM_STATE,
        AtomEnum::ATOM,
        &[atoms._NET_WM_STATE_ABOVE],
    )?;

    if input_passthrough {
        set_input_passthrough(conn, window)?;
    }

    debug!(window, width, height, visual, "overlay window created");

    Ok(CoverWindow {
        window,
        colormap,
        visual,
        depth: ARGB_DEPTH,
        width,
        height,
        atoms,
    })
}

/// Give `window` an empty input region so pointer events reach whatever is
/// underneath. Skipped with a warning when the SHAPE extension is missing.
fn set_input_passthrough(conn: &RustConnection, window: Window) -> Result<(), CoverError> {
    if conn
        .extension_information(shape::X11_EXTENSION_NAME)?
        .is_none()
    {
        warn!("SHAPE extension unavailable, overlay will catch pointer input");
        return Ok(());
    }
    conn.shape_rectangles(
        SO::SET,
        SK::INPUT,
        ClipOrdering::UNSORTED,
        window,
        0,
        0,
        &[],
    )?;
    Ok(())
}
