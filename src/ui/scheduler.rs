use std::time::Duration;

use gtk4::glib;

use crate::game::{Scheduler, Task};

/// Fires tasks from the GLib main loop, after the current event handler
/// has returned.
pub struct GlibScheduler;

impl Scheduler for GlibScheduler {
    fn schedule_after(&self, delay: Duration, task: Task) {
        glib::timeout_add_local_once(delay, task);
    }
}
