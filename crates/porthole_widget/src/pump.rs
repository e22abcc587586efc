//! The frame pump: fixed-interval driver for the engine's scheduler
//!
//! One pump per embedded widget. Each tick advances the engine's
//! cooperative task scheduler by one step and raises the widget's repaint
//! flag; the host's event loop drains the flag and repaints. Ticks are
//! delivered synchronously from [`FramePump::poll`], so everything here
//! stays on the host's GUI thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

/// Default refresh rate when none is configured.
pub const DEFAULT_FPS: u32 = 60;

/// Pump lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PumpState {
    /// Ticking at the configured interval
    Running,
    /// Halted; deadlines are abandoned until restarted
    Stopped,
}

/// Widget-owned repaint request flag.
///
/// The pump raises it through a [`RepaintHandle`]; the host checks and
/// clears it with [`take`](Self::take) once per event-loop pass and
/// repaints when it was set. Multiple ticks between passes collapse into
/// a single repaint.
#[derive(Debug)]
pub struct RepaintFlag {
    flag: Arc<AtomicBool>,
}

impl RepaintFlag {
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a non-owning handle for the pump to raise requests through.
    pub fn handle(&self) -> RepaintHandle {
        RepaintHandle {
            flag: Arc::downgrade(&self.flag),
        }
    }

    /// Check and clear the flag in one atomic swap.
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::Acquire)
    }

    /// Peek at the flag without clearing it.
    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

impl Default for RepaintFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Weak back-reference to a [`RepaintFlag`].
///
/// Requesting through a handle whose flag owner is gone is a no-op, so a
/// pump can never keep a torn-down widget's state alive.
#[derive(Clone, Debug)]
pub struct RepaintHandle {
    flag: Weak<AtomicBool>,
}

impl RepaintHandle {
    /// Raise the repaint request, if the owning flag still exists.
    pub fn request(&self) {
        if let Some(flag) = self.flag.upgrade() {
            flag.store(true, Ordering::Release);
        }
    }
}

/// Fixed-interval timer that steps the engine and requests repaints.
///
/// The pump starts in the [`Running`](PumpState::Running) state at
/// construction. Stopping is explicit (or happens on drop), and a tick
/// delivered after a stop request is ignored rather than stepping a
/// half-torn-down engine.
#[derive(Debug)]
pub struct FramePump {
    interval: Duration,
    state: PumpState,
    next_deadline: Instant,
    repaint: RepaintHandle,
}

impl FramePump {
    /// Create a running pump ticking every `1000 / fps` milliseconds.
    ///
    /// `fps` is clamped to at least 1. Rates above 1000 truncate to a
    /// zero interval, which fires once per [`poll`](Self::poll) pass.
    pub fn new(fps: u32, repaint: RepaintHandle) -> Self {
        let interval = Duration::from_millis(u64::from(1000 / fps.max(1)));
        Self {
            interval,
            state: PumpState::Running,
            next_deadline: Instant::now() + interval,
            repaint,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PumpState::Running
    }

    /// Restart a stopped pump; the next tick is one full interval away.
    pub fn start(&mut self) {
        if self.state == PumpState::Stopped {
            self.state = PumpState::Running;
            self.next_deadline = Instant::now() + self.interval;
        }
    }

    /// Stop the pump. Idempotent; pending deadlines are abandoned.
    pub fn stop(&mut self) {
        self.state = PumpState::Stopped;
    }

    /// When the next tick is due, or `None` while stopped.
    ///
    /// Hosts with their own timer primitive can schedule a wakeup for
    /// this instant instead of polling continuously.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            PumpState::Running => Some(self.next_deadline),
            PumpState::Stopped => None,
        }
    }

    /// Deliver a single timer tick: step the engine via `step`, then raise
    /// the repaint request.
    ///
    /// Returns false without side effects when the pump is not running.
    /// This is the guard for a tick that was already queued when a stop
    /// request landed.
    pub fn tick(&mut self, step: impl FnOnce()) -> bool {
        if !self.is_running() {
            return false;
        }
        step();
        self.repaint.request();
        true
    }

    /// Fire every tick that is due at `now`, returning how many fired.
    ///
    /// Ticks queue rather than coalesce: if the host stalled for three
    /// intervals, the engine is stepped three times. A zero interval
    /// fires exactly once per call.
    pub fn poll(&mut self, now: Instant, mut step: impl FnMut()) -> u32 {
        let mut fired = 0;
        while self.is_running() && now >= self.next_deadline {
            self.next_deadline += self.interval;
            self.tick(&mut step);
            fired += 1;
            if self.interval.is_zero() {
                self.next_deadline = now;
                break;
            }
        }
        fired
    }
}

impl Drop for FramePump {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_interval_is_whole_milliseconds() {
        let flag = RepaintFlag::new();
        assert_eq!(
            FramePump::new(60, flag.handle()).interval(),
            Duration::from_millis(16)
        );
        assert_eq!(
            FramePump::new(100, flag.handle()).interval(),
            Duration::from_millis(10)
        );
        assert_eq!(
            FramePump::new(1, flag.handle()).interval(),
            Duration::from_millis(1000)
        );
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let flag = RepaintFlag::new();
        let pump = FramePump::new(0, flag.handle());
        assert_eq!(pump.interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_new_pump_is_running() {
        let flag = RepaintFlag::new();
        let pump = FramePump::new(60, flag.handle());
        assert!(pump.is_running());
        assert_eq!(pump.state(), PumpState::Running);
        assert!(pump.next_deadline().is_some());
    }

    #[test]
    fn test_tick_steps_and_requests_repaint() {
        let flag = RepaintFlag::new();
        let mut pump = FramePump::new(60, flag.handle());
        let stepped = Cell::new(0);

        assert!(pump.tick(|| stepped.set(stepped.get() + 1)));
        assert_eq!(stepped.get(), 1);
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn test_tick_after_stop_is_ignored() {
        let flag = RepaintFlag::new();
        let mut pump = FramePump::new(60, flag.handle());
        pump.stop();

        let stepped = Cell::new(0);
        assert!(!pump.tick(|| stepped.set(stepped.get() + 1)));
        assert_eq!(stepped.get(), 0);
        assert!(!flag.is_requested());
        assert!(pump.next_deadline().is_none());
    }

    #[test]
    fn test_poll_fires_all_queued_ticks() {
        let flag = RepaintFlag::new();
        let mut pump = FramePump::new(100, flag.handle());
        let first_deadline = pump.next_deadline().unwrap();

        let stepped = Cell::new(0);
        let fired = pump.poll(first_deadline + Duration::from_millis(25), || {
            stepped.set(stepped.get() + 1);
        });

        // Due at +0ms, +10ms, +20ms; nothing skipped, nothing coalesced.
        assert_eq!(fired, 3);
        assert_eq!(stepped.get(), 3);
    }

    #[test]
    fn test_poll_before_deadline_fires_nothing() {
        let flag = RepaintFlag::new();
        let mut pump = FramePump::new(100, flag.handle());
        let first_deadline = pump.next_deadline().unwrap();

        let fired = pump.poll(first_deadline - Duration::from_millis(5), || {});
        assert_eq!(fired, 0);
        assert!(!flag.is_requested());
    }

    #[test]
    fn test_zero_interval_fires_once_per_poll() {
        let flag = RepaintFlag::new();
        let mut pump = FramePump::new(2000, flag.handle());
        assert!(pump.interval().is_zero());

        let now = pump.next_deadline().unwrap();
        assert_eq!(pump.poll(now, || {}), 1);
        assert_eq!(pump.poll(now + Duration::from_millis(1), || {}), 1);
    }

    #[test]
    fn test_stop_then_start_resumes_ticking() {
        let flag = RepaintFlag::new();
        let mut pump = FramePump::new(60, flag.handle());

        pump.stop();
        assert!(!pump.is_running());
        pump.stop();
        assert_eq!(pump.state(), PumpState::Stopped);

        pump.start();
        assert!(pump.is_running());
        let deadline = pump.next_deadline().unwrap();
        assert_eq!(pump.poll(deadline, || {}), 1);
    }

    #[test]
    fn test_start_while_running_keeps_deadline() {
        let flag = RepaintFlag::new();
        let mut pump = FramePump::new(60, flag.handle());
        let deadline = pump.next_deadline().unwrap();
        pump.start();
        assert_eq!(pump.next_deadline(), Some(deadline));
    }

    #[test]
    fn test_drop_never_raises_a_repaint() {
        let flag = RepaintFlag::new();
        let pump = FramePump::new(60, flag.handle());
        drop(pump);
        assert!(!flag.is_requested());
    }

    #[test]
    fn test_handle_survives_dropped_flag() {
        let flag = RepaintFlag::new();
        let mut pump = FramePump::new(60, flag.handle());
        drop(flag);

        // The step still runs; only the repaint request goes nowhere.
        let stepped = Cell::new(0);
        assert!(pump.tick(|| stepped.set(stepped.get() + 1)));
        assert_eq!(stepped.get(), 1);
    }

    #[test]
    fn test_poll_on_stopped_pump_fires_nothing() {
        let flag = RepaintFlag::new();
        let mut pump = FramePump::new(100, flag.handle());
        let first_deadline = pump.next_deadline().unwrap();
        pump.stop();

        let stepped = Cell::new(0);
        let fired = pump.poll(first_deadline + Duration::from_secs(1), || {
            stepped.set(stepped.get() + 1);
        });
        assert_eq!(fired, 0);
        assert_eq!(stepped.get(), 0);
    }
}
