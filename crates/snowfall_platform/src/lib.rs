//! Platform window layering for the snowfall wallpaper
//!
//! The host framework has no native wallpaper mode, so a background task
//! periodically re-asserts the render window at the bottom of the window
//! stack without letting it take focus:
//!
//! - [`manager::WindowManager`] - narrow capability trait over the OS window manager
//! - [`win32::Win32WindowManager`] - the Windows implementation
//! - [`daemon::LayeringDaemon`] - cancellable periodic restacking task

pub mod daemon;
pub mod manager;
#[cfg(windows)]
pub mod win32;

pub use daemon::{restack, LayeringDaemon};
pub use manager::{PlacementFlags, WindowHandle, WindowManager, ZOrder};
#[cfg(windows)]
pub use win32::Win32WindowManager;
