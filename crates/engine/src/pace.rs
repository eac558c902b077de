use std::thread;
use std::time::{Duration, Instant};

/// Optional fixed frame interval for the game loop.
///
/// With no interval the loop is never delayed.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Option<Duration>,
    last_frame: Option<Instant>,
}

impl FramePacer {
    pub fn new(interval: Option<Duration>) -> Self {
        Self {
            interval,
            last_frame: None,
        }
    }

    /// Time still to wait at `now` before the next frame may start.
    pub fn remaining(&self, now: Instant) -> Duration {
        match (self.interval, self.last_frame) {
            (Some(interval), Some(last)) => interval.saturating_sub(now.saturating_duration_since(last)),
            _ => Duration::ZERO,
        }
    }

    /// Record that a frame started at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last_frame = Some(now);
    }

    /// Sleep until the next frame is due, then mark it.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.mark(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaced_never_waits() {
        let mut pacer = FramePacer::new(None);
        let now = Instant::now();
        pacer.mark(now);
        assert_eq!(pacer.remaining(now), Duration::ZERO);
    }

    #[test]
    fn first_frame_is_immediate() {
        let pacer = FramePacer::new(Some(Duration::from_millis(50)));
        assert_eq!(pacer.remaining(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn remaining_counts_down_from_last_frame() {
        let mut pacer = FramePacer::new(Some(Duration::from_millis(50)));
        let start = Instant::now();
        pacer.mark(start);
        assert_eq!(pacer.remaining(start), Duration::from_millis(50));
        assert_eq!(
            pacer.remaining(start + Duration::from_millis(20)),
            Duration::from_millis(30)
        );
        assert_eq!(pacer.remaining(start + Duration::from_millis(80)), Duration::ZERO);
    }
}
