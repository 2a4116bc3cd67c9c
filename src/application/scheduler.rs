//! Tick scheduling for the running simulation.
//!
//! The controller feeds frame time into [`TickScheduler::advance`] and steps
//! the simulation once whenever it reports a due tick. At most one tick is
//! reported per call, so steps never overlap or pile up after a slow frame.
//! Time past a due tick carries over, so the average period matches the
//! configured interval whatever the frame rate.

/// Fastest allowed tick interval (slider maximum)
pub const MIN_INTERVAL_MS: u32 = 50;
/// Slowest allowed tick interval (slider minimum)
pub const MAX_INTERVAL_MS: u32 = 500;
pub const DEFAULT_INTERVAL_MS: u32 = 200;

/// Map a speed slider position in `[MIN_INTERVAL_MS, MAX_INTERVAL_MS]` to an
/// interval. The slider is reversed: higher values mean shorter intervals.
/// The mapping is its own inverse.
pub fn interval_from_slider(value: u32) -> u32 {
    MAX_INTERVAL_MS + MIN_INTERVAL_MS - value.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS)
}

fn generations_per_second(interval_ms: u32) -> u32 {
    (1000.0 / interval_ms.max(1) as f32).round() as u32
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickScheduler {
    interval_ms: u32,
    pending_ms: f32,
    armed: bool,
}

impl TickScheduler {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS),
            pending_ms: 0.0,
            armed: false,
        }
    }

    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start scheduling ticks, counting from now
    pub fn arm(&mut self) {
        self.armed = true;
        self.pending_ms = 0.0;
    }

    /// Stop scheduling ticks and drop any partially elapsed interval
    pub fn disarm(&mut self) {
        self.armed = false;
        self.pending_ms = 0.0;
    }

    /// Change the period. The pending tick is cancelled and the next one is
    /// a full new interval away.
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        self.pending_ms = 0.0;
    }

    /// Account for `delta_seconds` of wall time. Returns true when a tick is
    /// due; the caller must run that tick to completion before advancing again.
    pub fn advance(&mut self, delta_seconds: f32) -> bool {
        if !self.armed {
            return false;
        }

        let interval = self.interval_ms as f32;
        self.pending_ms += delta_seconds.max(0.0) * 1000.0;
        if self.pending_ms < interval {
            return false;
        }

        self.pending_ms -= interval;
        // a whole interval or more behind: drop the backlog
        if self.pending_ms >= interval {
            self.pending_ms = 0.0;
        }
        true
    }

    /// Rate shown next to the speed slider
    pub fn generations_per_second(&self) -> u32 {
        generations_per_second(self.interval_ms)
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_mapping_is_reversed() {
        assert_eq!(interval_from_slider(50), 500);
        assert_eq!(interval_from_slider(500), 50);
        assert_eq!(interval_from_slider(300), 250);
        assert_eq!(interval_from_slider(interval_from_slider(120)), 120);
        assert_eq!(interval_from_slider(0), 500);
    }

    #[test]
    fn test_generations_per_second() {
        assert_eq!(generations_per_second(200), 5);
        assert_eq!(generations_per_second(50), 20);
        assert_eq!(generations_per_second(300), 3);
    }

    #[test]
    fn test_disarmed_never_ticks() {
        let mut scheduler = TickScheduler::new(100);
        assert!(!scheduler.advance(10.0));
    }

    #[test]
    fn test_one_tick_per_advance() {
        let mut scheduler = TickScheduler::new(100);
        scheduler.arm();

        assert!(!scheduler.advance(0.05));
        assert!(scheduler.advance(0.06));
        // a long stall still yields a single tick
        assert!(scheduler.advance(5.0));
        assert!(!scheduler.advance(0.01));
    }

    fn ticks_over(scheduler: &mut TickScheduler, frame_seconds: f32, frames: usize) -> usize {
        (0..frames).filter(|_| scheduler.advance(frame_seconds)).count()
    }

    #[test]
    fn test_rate_matches_interval_at_uneven_frame_times() {
        // 10 simulated seconds at frame rates that do not divide the interval
        for (interval, fps) in [(50, 61), (100, 61), (50, 144), (200, 75)] {
            let mut scheduler = TickScheduler::new(interval);
            scheduler.arm();
            let ticks = ticks_over(&mut scheduler, 1.0 / fps as f32, fps * 10);
            let expected = 10_000 / interval as usize;
            assert!(
                ticks + 1 >= expected && ticks <= expected,
                "{interval}ms at {fps}fps ticked {ticks} times, expected {expected}"
            );
        }
    }

    #[test]
    fn test_leftover_time_carries_into_next_tick() {
        let mut scheduler = TickScheduler::new(100);
        scheduler.arm();
        assert!(scheduler.advance(0.13));
        assert!(!scheduler.advance(0.0));
        assert!(scheduler.advance(0.075));
    }

    #[test]
    fn test_set_interval_cancels_pending() {
        let mut scheduler = TickScheduler::new(100);
        scheduler.arm();
        assert!(!scheduler.advance(0.09));

        scheduler.set_interval(100);
        assert!(!scheduler.advance(0.09));
        assert!(scheduler.advance(0.02));
    }

    #[test]
    fn test_interval_is_clamped() {
        assert_eq!(TickScheduler::new(1).interval_ms(), MIN_INTERVAL_MS);
        let mut scheduler = TickScheduler::default();
        scheduler.set_interval(10_000);
        assert_eq!(scheduler.interval_ms(), MAX_INTERVAL_MS);
    }

    #[test]
    fn test_disarm_drops_pending() {
        let mut scheduler = TickScheduler::new(100);
        scheduler.arm();
        scheduler.advance(0.09);
        scheduler.disarm();
        scheduler.arm();
        assert!(!scheduler.advance(0.02));
    }
}
