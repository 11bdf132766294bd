//! Interned atoms used by the overlay window.

x11rb::atom_manager! {
    pub CoverAtoms: CoverAtomsCookie {
        WM_PROTOCOLS,
        WM_DELETE_WINDOW,
        _NET_WM_STATE,
        _NET_WM_STATE_ABOVE,
    }
}
