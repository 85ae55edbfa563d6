//! Monotonic time points and differencing for pacing and latency
//! measurement. Pure value computations, callable from any thread.

use std::time::Duration;

/// Nanoseconds per second; the normalization bound for [`Timespec::nsec`].
pub const NANOS_PER_SEC: u32 = 1_000_000_000;

/// A monotonic clock reading or a non-negative elapsed interval.
///
/// Invariant: `nsec < 1_000_000_000`. The ordering derives from the
/// `(sec, nsec)` field order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timespec {
    pub sec: i64,
    pub nsec: u32,
}

impl Timespec {
    pub const ZERO: Timespec = Timespec { sec: 0, nsec: 0 };

    pub fn new(sec: i64, nsec: u32) -> Self {
        debug_assert!(nsec < NANOS_PER_SEC);
        Self { sec, nsec }
    }

    /// Interpret a non-negative interval as a [`Duration`].
    pub fn as_duration(self) -> Duration {
        Duration::new(self.sec.max(0) as u64, self.nsec)
    }
}

impl From<Duration> for Timespec {
    fn from(d: Duration) -> Self {
        Self {
            sec: d.as_secs() as i64,
            nsec: d.subsec_nanos(),
        }
    }
}

/// Difference between two monotonic readings.
///
/// Returns the direction of elapsed time from `a` to `b` (+1 when `b` is
/// later, -1 when `a` is later, 0 when equal) together with the absolute
/// difference `|b - a|`, normalized so the nanosecond field stays below
/// one second. Nanosecond borrow across the seconds field is explicit.
/// Total over all representable inputs.
pub fn diff(a: Timespec, b: Timespec) -> (i32, Timespec) {
    use std::cmp::Ordering;

    let (later, earlier, sign) = match b.cmp(&a) {
        Ordering::Greater => (b, a, 1),
        Ordering::Less => (a, b, -1),
        Ordering::Equal => return (0, Timespec::ZERO),
    };

    let delta = if later.nsec >= earlier.nsec {
        Timespec {
            sec: later.sec - earlier.sec,
            nsec: later.nsec - earlier.nsec,
        }
    } else {
        Timespec {
            sec: later.sec - earlier.sec - 1,
            nsec: later.nsec + NANOS_PER_SEC - earlier.nsec,
        }
    };
    (sign, delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_points_give_zero() {
        let ts = Timespec::new(12345, 67890);
        assert_eq!(diff(ts, ts), (0, Timespec::ZERO));
    }

    #[test]
    fn forward_within_one_second() {
        let a = Timespec::new(10, 100_000_000);
        let b = Timespec::new(10, 500_000_000);
        assert_eq!(diff(a, b), (1, Timespec::new(0, 400_000_000)));
    }

    #[test]
    fn forward_with_nanosecond_borrow() {
        let a = Timespec::new(10, 800_000_000);
        let b = Timespec::new(12, 100_000_000);
        assert_eq!(diff(a, b), (1, Timespec::new(1, 300_000_000)));
    }

    #[test]
    fn backward_within_one_second() {
        let a = Timespec::new(10, 500_000_000);
        let b = Timespec::new(10, 100_000_000);
        assert_eq!(diff(a, b), (-1, Timespec::new(0, 400_000_000)));
    }

    #[test]
    fn backward_with_nanosecond_borrow() {
        let a = Timespec::new(12, 100_000_000);
        let b = Timespec::new(10, 800_000_000);
        assert_eq!(diff(a, b), (-1, Timespec::new(1, 300_000_000)));
    }

    #[test]
    fn duration_conversions() {
        let ts = Timespec::from(Duration::from_millis(1500));
        assert_eq!(ts, Timespec::new(1, 500_000_000));
        assert_eq!(ts.as_duration(), Duration::from_millis(1500));
    }
}
