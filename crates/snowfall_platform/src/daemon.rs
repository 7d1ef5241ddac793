//! Background task that keeps the render window at the bottom of the stack

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::manager::{PlacementFlags, WindowManager, ZOrder};

/// Perform one restack step
///
/// Pushes the render window to the bottom of the stacking order and
/// reasserts the previously focused window so it is not displaced. Returns
/// `false` when the render window cannot be found yet; the caller retries
/// on its next tick.
pub fn restack<M: WindowManager>(manager: &M, title: &str, class: &str) -> bool {
    let Some(window) = manager.find_window(title, class) else {
        log::debug!("render window not found, retrying on next tick");
        return false;
    };

    let focused = manager.focused_window();

    manager.set_window_z_order(window, ZOrder::Bottom, PlacementFlags::restack());

    if let Some(focused) = focused {
        if focused != window {
            manager.set_window_z_order(focused, ZOrder::Top, PlacementFlags::restack());
        }
    }

    true
}

/// Handle to the background layering task
///
/// The task sleeps through a startup delay that gives the render window
/// time to exist, then restacks on a fixed tick until cancelled. Dropping
/// the handle stops the task.
pub struct LayeringDaemon {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl LayeringDaemon {
    /// Spawn the daemon thread
    pub fn spawn<M>(
        manager: M,
        title: String,
        class: String,
        startup_delay: Duration,
        interval: Duration,
    ) -> Self
    where
        M: WindowManager + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();

        let thread = thread::spawn(move || {
            thread::sleep(startup_delay);
            while flag.load(Ordering::Relaxed) {
                restack(&manager, &title, &class);
                thread::sleep(interval);
            }
        });

        Self {
            running,
            thread: Some(thread),
        }
    }

    /// Cancel the daemon and wait for its thread to finish
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for LayeringDaemon {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::WindowHandle;
    use std::sync::Mutex;

    const WALLPAPER: WindowHandle = WindowHandle(10);
    const OTHER: WindowHandle = WindowHandle(20);

    /// Records every reposition request instead of touching the OS
    struct FakeManager {
        window: Option<WindowHandle>,
        focused: Option<WindowHandle>,
        calls: Arc<Mutex<Vec<(WindowHandle, ZOrder, PlacementFlags)>>>,
    }

    impl FakeManager {
        fn new(
            window: Option<WindowHandle>,
            focused: Option<WindowHandle>,
        ) -> (Self, Arc<Mutex<Vec<(WindowHandle, ZOrder, PlacementFlags)>>>) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    window,
                    focused,
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    impl WindowManager for FakeManager {
        fn find_window(&self, _title: &str, _class: &str) -> Option<WindowHandle> {
            self.window
        }

        fn focused_window(&self) -> Option<WindowHandle> {
            self.focused
        }

        fn set_window_z_order(&self, window: WindowHandle, order: ZOrder, flags: PlacementFlags) {
            self.calls.lock().unwrap().push((window, order, flags));
        }
    }

    #[test]
    fn test_restack_window_missing_is_nonfatal() {
        let (manager, calls) = FakeManager::new(None, Some(OTHER));
        assert!(!restack(&manager, "Snow Wallpaper", "Window Class"));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_restack_pushes_wallpaper_to_bottom() {
        let (manager, calls) = FakeManager::new(Some(WALLPAPER), None);
        assert!(restack(&manager, "Snow Wallpaper", "Window Class"));

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![(WALLPAPER, ZOrder::Bottom, PlacementFlags::restack())]
        );
    }

    #[test]
    fn test_restack_restores_focused_window() {
        let (manager, calls) = FakeManager::new(Some(WALLPAPER), Some(OTHER));
        assert!(restack(&manager, "Snow Wallpaper", "Window Class"));

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], (WALLPAPER, ZOrder::Bottom, PlacementFlags::restack()));
        assert_eq!(calls[1], (OTHER, ZOrder::Top, PlacementFlags::restack()));
    }

    #[test]
    fn test_restack_skips_restore_when_wallpaper_is_focused() {
        let (manager, calls) = FakeManager::new(Some(WALLPAPER), Some(WALLPAPER));
        assert!(restack(&manager, "Snow Wallpaper", "Window Class"));
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_daemon_ticks_until_stopped() {
        let (manager, calls) = FakeManager::new(Some(WALLPAPER), None);
        let mut daemon = LayeringDaemon::spawn(
            manager,
            "Snow Wallpaper".to_string(),
            "Window Class".to_string(),
            Duration::from_millis(1),
            Duration::from_millis(5),
        );

        thread::sleep(Duration::from_millis(60));
        daemon.stop();

        let ticked = calls.lock().unwrap().len();
        assert!(ticked >= 2, "expected several ticks, got {ticked}");

        thread::sleep(Duration::from_millis(20));
        assert_eq!(calls.lock().unwrap().len(), ticked);
    }
}
