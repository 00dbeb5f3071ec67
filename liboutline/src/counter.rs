//! Level Counter
//!
//! One running counter per nesting depth. Rising back toward the root
//! restarts every abandoned deeper branch at zero, while shallower levels
//! keep counting.

/// Ordered counters indexed by depth, grown on demand.
#[derive(Debug, Clone, Default)]
pub struct LevelCounter {
    counts: Vec<usize>,
    previous: Option<usize>,
}

impl LevelCounter {
    /// Create an empty counter with no levels seen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more item at `depth` and return its number.
    pub fn bump(&mut self, depth: usize) -> usize {
        if self.previous.map_or(false, |previous| depth < previous) {
            for count in self.counts.iter_mut().skip(depth + 1) {
                *count = 0;
            }
        }
        if self.counts.len() <= depth {
            self.counts.resize(depth + 1, 0);
        }
        self.counts[depth] += 1;
        self.previous = Some(depth);
        self.counts[depth]
    }

    /// Current counter values, outermost first.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Deepest level seen so far.
    pub fn max_depth(&self) -> Option<usize> {
        self.counts.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_siblings_count_up() {
        let mut counter = LevelCounter::new();
        assert_eq!(counter.bump(0), 1);
        assert_eq!(counter.bump(0), 2);
        assert_eq!(counter.bump(0), 3);
    }

    #[test]
    fn test_rising_resets_descendants() {
        let mut counter = LevelCounter::new();
        counter.bump(0);
        counter.bump(1);
        counter.bump(1);
        counter.bump(2);
        assert_eq!(counter.counts(), &[1, 2, 1]);
        assert_eq!(counter.bump(0), 2);
        assert_eq!(counter.counts(), &[2, 0, 0]);
        assert_eq!(counter.bump(1), 1);
    }

    #[test]
    fn test_partial_rise_keeps_ancestors() {
        let mut counter = LevelCounter::new();
        counter.bump(0);
        counter.bump(1);
        counter.bump(2);
        counter.bump(2);
        assert_eq!(counter.bump(1), 2);
        assert_eq!(counter.counts(), &[1, 2, 0]);
        assert_eq!(counter.bump(2), 1);
    }

    #[test]
    fn test_skipped_levels_stay_zero() {
        let mut counter = LevelCounter::new();
        counter.bump(0);
        assert_eq!(counter.bump(3), 1);
        assert_eq!(counter.counts(), &[1, 0, 0, 1]);
        assert_eq!(counter.max_depth(), Some(3));
    }

    #[test]
    fn test_empty() {
        let counter = LevelCounter::new();
        assert!(counter.counts().is_empty());
        assert_eq!(counter.max_depth(), None);
    }
}
