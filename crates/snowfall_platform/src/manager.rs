//! Window manager capability interface

use bitflags::bitflags;

/// Opaque OS window handle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowHandle(pub isize);

/// Stacking-order reference for a reposition request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZOrder {
    /// The back of the window stack, just above the desktop
    Bottom,
    /// The front of the non-topmost stack
    Top,
}

bitflags! {
    /// Behavior flags for a reposition request
    ///
    /// Values mirror the Win32 SWP_* constants so the Windows
    /// implementation passes them straight through.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PlacementFlags: u32 {
        /// Keep the window's current size
        const NO_SIZE = 0x0001;
        /// Keep the window's current position
        const NO_MOVE = 0x0002;
        /// Do not give the window input focus
        const NO_ACTIVATE = 0x0010;
        /// Force the window shown
        const SHOW_WINDOW = 0x0040;
    }
}

impl PlacementFlags {
    /// Flags used for every wallpaper restack: reposition in Z only, never
    /// steal focus, keep the window visible
    pub fn restack() -> Self {
        Self::NO_MOVE | Self::NO_SIZE | Self::NO_ACTIVATE | Self::SHOW_WINDOW
    }
}

/// Narrow capability interface over the platform window manager
///
/// Only the three operations the layering daemon needs. Implementations
/// treat every failure past the found/not-found check as best-effort and
/// swallow it.
pub trait WindowManager {
    /// Locate a window by title, falling back to class name
    fn find_window(&self, title: &str, class: &str) -> Option<WindowHandle>;

    /// The window that currently has input focus, if any
    fn focused_window(&self) -> Option<WindowHandle>;

    /// Reposition `window` in the stacking order without moving or resizing it
    fn set_window_z_order(&self, window: WindowHandle, order: ZOrder, flags: PlacementFlags);
}
