// ticker.rs - Cancellable repeating task gated on caller-supplied timestamps
//
// The host polls the task once per frame with the current time; the task
// decides whether that frame is a tick. Nothing here knows about egui.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Idle,
    Scheduled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Task is not scheduled; the caller should not ask for another frame.
    Idle,
    /// The interval has elapsed. The timestamp has been recorded.
    Fire,
    /// Not yet; poll again after the remaining time.
    Wait(Duration),
}

#[derive(Debug, Clone)]
pub struct RepeatingTask {
    interval: Duration,
    last_fired_ms: Option<f64>,
    state: TaskState,
}

impl RepeatingTask {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired_ms: None,
            state: TaskState::Idle,
        }
    }

    /// Interval for a rate given in ticks per second. A zero rate is treated as one.
    pub fn interval_for_rate(per_second: u32) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(per_second.max(1)))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn is_scheduled(&self) -> bool {
        self.state == TaskState::Scheduled
    }

    /// Returns `false` if the task was already scheduled.
    pub fn start(&mut self) -> bool {
        if self.is_scheduled() {
            return false;
        }
        self.state = TaskState::Scheduled;
        true
    }

    /// Returns `false` if there was nothing to cancel.
    pub fn cancel(&mut self) -> bool {
        let was_scheduled = self.is_scheduled();
        self.state = TaskState::Idle;
        was_scheduled
    }

    /// `now_ms` must be monotonic. The last accepted timestamp survives a
    /// cancel, so a restart after a long pause fires on its first poll.
    pub fn poll(&mut self, now_ms: f64) -> Tick {
        if !self.is_scheduled() {
            return Tick::Idle;
        }

        let interval_ms = self.interval.as_secs_f64() * 1000.0;
        let elapsed_ms = match self.last_fired_ms {
            Some(last) => now_ms - last,
            None => f64::INFINITY,
        };

        if elapsed_ms >= interval_ms {
            self.last_fired_ms = Some(now_ms);
            Tick::Fire
        } else {
            Tick::Wait(Duration::from_secs_f64((interval_ms - elapsed_ms).max(0.0) / 1000.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_task_never_fires() {
        let mut task = RepeatingTask::new(Duration::from_millis(100));
        assert_eq!(task.poll(0.0), Tick::Idle);
        assert_eq!(task.poll(10_000.0), Tick::Idle);
    }

    #[test]
    fn first_poll_after_start_fires() {
        let mut task = RepeatingTask::new(Duration::from_millis(100));
        assert!(task.start());
        assert!(!task.start());
        assert_eq!(task.poll(5.0), Tick::Fire);
    }

    #[test]
    fn fires_once_per_interval() {
        let mut task = RepeatingTask::new(Duration::from_millis(100));
        task.start();
        assert_eq!(task.poll(1000.0), Tick::Fire);

        match task.poll(1040.0) {
            Tick::Wait(remaining) => {
                let ms = remaining.as_secs_f64() * 1000.0;
                assert!((ms - 60.0).abs() < 1e-6, "remaining {ms}");
            }
            other => panic!("expected Wait, got {other:?}"),
        }

        assert_eq!(task.poll(1100.0), Tick::Fire);
        assert!(matches!(task.poll(1150.0), Tick::Wait(_)));
        assert_eq!(task.poll(1260.0), Tick::Fire);
    }

    #[test]
    fn cancel_stops_pending_ticks() {
        let mut task = RepeatingTask::new(Duration::from_millis(100));
        task.start();
        assert_eq!(task.poll(0.0), Tick::Fire);
        assert!(task.cancel());
        assert!(!task.cancel());
        assert_eq!(task.poll(500.0), Tick::Idle);
        assert_eq!(task.state(), TaskState::Idle);
    }

    #[test]
    fn restart_after_long_pause_fires_immediately() {
        let mut task = RepeatingTask::new(Duration::from_millis(100));
        task.start();
        assert_eq!(task.poll(0.0), Tick::Fire);
        task.cancel();
        task.start();
        assert_eq!(task.poll(2_000.0), Tick::Fire);
    }

    #[test]
    fn interval_follows_rate() {
        assert_eq!(RepeatingTask::interval_for_rate(10), Duration::from_millis(100));
        assert_eq!(RepeatingTask::interval_for_rate(1), Duration::from_secs(1));
        assert_eq!(RepeatingTask::interval_for_rate(0), Duration::from_secs(1));

        let mut task = RepeatingTask::new(Duration::from_secs(1));
        task.set_interval(RepeatingTask::interval_for_rate(4));
        assert_eq!(task.interval(), Duration::from_millis(250));
    }
}
