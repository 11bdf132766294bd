//! Fade countdown and tick scheduling.
//!
//! After a key press the ring is redrawn on every tick with a decreasing
//! alpha until the countdown reaches zero.

use std::time::{Duration, Instant};

use super::constants::{FADE_COUNTDOWN, FADE_PEAK_ALPHA};

/// Remaining fade steps after the last key press.
///
/// ARMED while `count > 0`, IDLE at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FadeTimer {
    count: u32,
}

impl FadeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump straight to the full countdown.
    pub fn arm(&mut self) {
        self.count = FADE_COUNTDOWN;
    }

    pub fn is_armed(&self) -> bool {
        self.count > 0
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Consume one step.
    ///
    /// Returns the alpha to draw this step with (`count * 160 / 100`, taken
    /// before the decrement), or `None` while idle.
    pub fn tick(&mut self) -> Option<u8> {
        if self.count == 0 {
            return None;
        }
        let alpha = self.count * FADE_PEAK_ALPHA / FADE_COUNTDOWN;
        self.count -= 1;
        Some(alpha as u8)
    }
}

/// Next-wake-time bookkeeping for the periodic fade tick.
///
/// Ticks are handled on the same queue as window events, so the host only
/// needs to know when the next one is due.
#[derive(Debug, Clone, Copy)]
pub struct TickSchedule {
    interval: Duration,
    next: Instant,
}

impl TickSchedule {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Time left until the next tick; zero when already due.
    pub fn time_until(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Move past a tick that was just handled. Missed periods are skipped
    /// rather than replayed.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
    }

    /// Start a fresh period from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.next = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_idle() {
        let mut t = FadeTimer::new();
        assert!(!t.is_armed());
        assert_eq!(t.tick(), None);
    }

    #[test]
    fn test_arm_sets_full_countdown() {
        let mut t = FadeTimer::new();
        t.arm();
        assert_eq!(t.count(), FADE_COUNTDOWN);
        assert_eq!(t.tick(), Some(160));
        assert_eq!(t.count(), FADE_COUNTDOWN - 1);
    }

    #[test]
    fn test_rearm_mid_fade_jumps_to_max() {
        let mut t = FadeTimer::new();
        t.arm();
        for _ in 0..40 {
            t.tick();
        }
        t.arm();
        assert_eq!(t.count(), FADE_COUNTDOWN);
    }

    #[test]
    fn test_schedule_due_after_interval() {
        let start = Instant::now();
        let s = TickSchedule::new(Duration::from_millis(10), start);
        assert!(!s.is_due(start));
        assert!(s.is_due(start + Duration::from_millis(10)));
        assert_eq!(s.time_until(start), Duration::from_millis(10));
    }

    #[test]
    fn test_schedule_advance_skips_missed_periods() {
        let start = Instant::now();
        let mut s = TickSchedule::new(Duration::from_millis(10), start);
        let late = start + Duration::from_millis(55);
        s.advance(late);
        assert!(!s.is_due(late));
        assert_eq!(s.time_until(late), Duration::from_millis(10));
    }

    #[test]
    fn test_schedule_advance_keeps_cadence() {
        let start = Instant::now();
        let mut s = TickSchedule::new(Duration::from_millis(10), start);
        let on_time = start + Duration::from_millis(12);
        s.advance(on_time);
        assert_eq!(s.time_until(on_time), Duration::from_millis(8));
    }
}
