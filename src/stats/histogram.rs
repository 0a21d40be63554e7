/// Fixed-size bucket counter indexed `0..N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Histogram<const N: usize> {
    buckets: [u64; N],
}

impl<const N: usize> Default for Histogram<N> {
    fn default() -> Self {
        Self { buckets: [0; N] }
    }
}

impl<const N: usize> Histogram<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments bucket `index`. Callers guarantee `index < N`.
    pub(crate) fn increment(&mut self, index: usize) {
        self.buckets[index] += 1;
    }

    pub fn count(&self, index: usize) -> u64 {
        self.buckets.get(index).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64; N] {
        &self.buckets
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().sum()
    }

    /// Adds another shard's buckets into this one.
    pub fn merge(&mut self, other: &Self) {
        for (mine, theirs) in self.buckets.iter_mut().zip(other.buckets.iter()) {
            *mine += theirs;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.buckets.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_total() {
        let mut histogram = Histogram::<4>::new();
        histogram.increment(1);
        histogram.increment(1);
        histogram.increment(3);

        assert_eq!(histogram.counts(), &[0, 2, 0, 1]);
        assert_eq!(histogram.total(), 3);
        assert_eq!(histogram.count(9), 0);
    }

    #[test]
    fn test_merge_sums_buckets() {
        let mut left = Histogram::<3>::new();
        left.increment(0);
        let mut right = Histogram::<3>::new();
        right.increment(0);
        right.increment(2);

        left.merge(&right);
        assert_eq!(left.counts(), &[2, 0, 1]);
    }
}
