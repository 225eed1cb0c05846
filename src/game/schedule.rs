use std::cell::{Cell, RefCell};
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay, on the same thread that scheduled it.
pub trait Scheduler {
    fn schedule_after(&self, delay: Duration, task: Task);
}

struct Timer {
    due: Duration,
    seq: u64,
    task: Task,
}

/// Virtual clock. Nothing fires until [`ManualScheduler::advance`] is called.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Moves the clock forward, firing due timers in deadline order.
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now.get() + by;
        let mut fired = 0;
        while let Some(timer) = self.pop_due(target) {
            self.now.set(timer.due.max(self.now.get()));
            (timer.task)();
            fired += 1;
        }
        self.now.set(target);
        fired
    }

    pub fn advance_ms(&self, ms: u64) -> usize {
        self.advance(Duration::from_millis(ms))
    }

    fn pop_due(&self, target: Duration) -> Option<Timer> {
        let mut timers = self.timers.borrow_mut();
        let idx = timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= target)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(idx, _)| idx)?;
        Some(timers.swap_remove(idx))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&self, delay: Duration, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.timers.borrow_mut().push(Timer {
            due: self.now.get() + delay,
            seq,
            task,
        });
    }
}
