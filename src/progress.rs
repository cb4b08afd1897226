/// ProgressTracker decides when a hashing session should surface a
/// progress notification. Emission state lives inside the tracker, so
/// independent sessions running concurrently never cross-contaminate
/// their thresholds. It is consulted alongside an engine and has no
/// effect on the digest.
pub struct ProgressTracker {
    total: Option<u64>,
    last_reported: Option<u64>,
}

impl ProgressTracker {
    /// new builds a tracker. A zero or absent hint disables reporting.
    pub fn new(total_hint: Option<u64>) -> ProgressTracker {
        ProgressTracker {
            total: total_hint.filter(|&t| t > 0),
            last_reported: None,
        }
    }

    /// update records the running byte count and returns the percentage to
    /// report, or `None` when no notification is due. Notifications are at
    /// least 5 points apart, except that 100% is always reported once.
    pub fn update(&mut self, bytes_processed: u64) -> Option<u64> {
        let total = self.total?;
        // The hint is only a hint; processing more than it reads as done.
        let percentage = (bytes_processed as u128 * 100 / total as u128).min(100) as u64;
        let due = match self.last_reported {
            None => true,
            Some(last) => percentage >= last + 5 || (percentage == 100 && last < 100),
        };
        if !due {
            return None;
        }
        self.last_reported = Some(percentage);
        Some(percentage)
    }
}

/// parse_size_hint interprets a caller-supplied total-size hint. Anything
/// unparsable or zero means "no hint"; a bad hint must never fail the
/// hashing session.
pub fn parse_size_hint(arg: Option<&str>) -> Option<u64> {
    arg.and_then(|s| s.trim().parse().ok()).filter(|&n| n > 0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_hint_is_silent() {
        let mut tracker = ProgressTracker::new(None);
        assert_eq!(tracker.update(0), None);
        assert_eq!(tracker.update(1 << 30), None);

        let mut tracker = ProgressTracker::new(Some(0));
        assert_eq!(tracker.update(10), None);
    }

    #[test]
    fn five_point_steps() {
        let mut tracker = ProgressTracker::new(Some(1000));
        assert_eq!(tracker.update(0), Some(0));
        assert_eq!(tracker.update(10), None); // 1%
        assert_eq!(tracker.update(49), None); // 4%
        assert_eq!(tracker.update(50), Some(5));
        assert_eq!(tracker.update(80), None); // 8%
        assert_eq!(tracker.update(370), Some(37));
        assert_eq!(tracker.update(410), None); // 41%
        assert_eq!(tracker.update(420), Some(42));
    }

    #[test]
    fn hundred_reported_once() {
        let mut tracker = ProgressTracker::new(Some(100));
        assert_eq!(tracker.update(0), Some(0));
        assert_eq!(tracker.update(98), Some(98));
        // 2-point jump, below the 5-point step, but it is completion
        assert_eq!(tracker.update(100), Some(100));
        assert_eq!(tracker.update(100), None);
    }

    #[test]
    fn overshoot_clamps() {
        let mut tracker = ProgressTracker::new(Some(100));
        assert_eq!(tracker.update(250), Some(100));
        assert_eq!(tracker.update(300), None);
    }

    #[test]
    fn independent_sessions() {
        let mut first = ProgressTracker::new(Some(100));
        let mut second = ProgressTracker::new(Some(100));
        assert_eq!(first.update(50), Some(50));
        // a fresh session starts from its own baseline
        assert_eq!(second.update(3), Some(3));
    }

    #[test]
    fn parse_hints() {
        assert_eq!(parse_size_hint(Some("4096")), Some(4096));
        assert_eq!(parse_size_hint(Some(" 12 ")), Some(12));
        assert_eq!(parse_size_hint(Some("0")), None);
        assert_eq!(parse_size_hint(Some("-3")), None);
        assert_eq!(parse_size_hint(Some("banana")), None);
        assert_eq!(parse_size_hint(None), None);
    }
}
