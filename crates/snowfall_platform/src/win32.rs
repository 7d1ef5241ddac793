//! Win32 window manager implementation

use windows::core::HSTRING;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    FindWindowW, GetForegroundWindow, SetWindowPos, HWND_BOTTOM, HWND_TOP, SET_WINDOW_POS_FLAGS,
};

use crate::manager::{PlacementFlags, WindowHandle, WindowManager, ZOrder};

/// Window manager backed by user32 via the `windows` crate
#[derive(Clone, Copy, Debug, Default)]
pub struct Win32WindowManager;

impl Win32WindowManager {
    pub fn new() -> Self {
        Self
    }
}

fn to_handle(hwnd: HWND) -> Option<WindowHandle> {
    if hwnd.is_invalid() {
        None
    } else {
        Some(WindowHandle(hwnd.0 as isize))
    }
}

fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut core::ffi::c_void)
}

impl WindowManager for Win32WindowManager {
    fn find_window(&self, title: &str, class: &str) -> Option<WindowHandle> {
        unsafe { FindWindowW(None, &HSTRING::from(title)) }
            .ok()
            .and_then(to_handle)
            .or_else(|| {
                unsafe { FindWindowW(&HSTRING::from(class), None) }
                    .ok()
                    .and_then(to_handle)
            })
    }

    fn focused_window(&self) -> Option<WindowHandle> {
        to_handle(unsafe { GetForegroundWindow() })
    }

    fn set_window_z_order(&self, window: WindowHandle, order: ZOrder, flags: PlacementFlags) {
        let insert_after = match order {
            ZOrder::Bottom => HWND_BOTTOM,
            ZOrder::Top => HWND_TOP,
        };

        let _ = unsafe {
            SetWindowPos(
                to_hwnd(window),
                insert_after,
                0,
                0,
                0,
                0,
                SET_WINDOW_POS_FLAGS(flags.bits()),
            )
        };
    }
}
