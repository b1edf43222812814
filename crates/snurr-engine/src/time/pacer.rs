use std::time::{Duration, Instant};

/// Fixed-timestep frame pacing.
///
/// A frame is due once its deadline has passed. After a frame the deadline
/// moves forward by one interval; if the loop fell more than a full interval
/// behind, the schedule restarts from `now` instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    deadline: Instant,
}

impl FramePacer {
    /// Creates a pacer whose first frame is due immediately.
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            deadline: start,
        }
    }

    /// When the next frame is due.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Records that a frame was produced at `now` and schedules the next one.
    pub fn advance(&mut self, now: Instant) {
        let next = self.deadline + self.interval;
        self.deadline = if next <= now {
            now + self.interval
        } else {
            next
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(2);

    #[test]
    fn first_frame_is_due_at_start() {
        let start = Instant::now();
        let pacer = FramePacer::starting_at(STEP, start);

        assert!(pacer.is_due(start));
        assert!(!pacer.is_due(start - Duration::from_micros(1)));
    }

    #[test]
    fn on_time_frames_advance_by_one_interval() {
        let start = Instant::now();
        let mut pacer = FramePacer::starting_at(STEP, start);

        pacer.advance(start);
        assert_eq!(pacer.deadline(), start + STEP);
        assert!(!pacer.is_due(start + Duration::from_millis(1)));

        // Slightly late frames keep the original grid.
        pacer.advance(start + STEP + Duration::from_micros(500));
        assert_eq!(pacer.deadline(), start + STEP * 2);
    }

    #[test]
    fn stall_resynchronizes_instead_of_bursting() {
        let start = Instant::now();
        let mut pacer = FramePacer::starting_at(STEP, start);

        let late = start + Duration::from_millis(100);
        pacer.advance(late);

        assert_eq!(pacer.deadline(), late + STEP);
        assert!(!pacer.is_due(late));
    }
}
