//! Bounded buffer of pending index inserts.

/// Why a batch was handed to the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushTrigger {
    Threshold,
    Final,
}

/// Ordered pending inserts, never longer than `max` when `max > 0`.
#[derive(Debug)]
pub struct Batch<T> {
    pending: Vec<T>,
    max: usize,
}

impl<T> Batch<T> {
    /// `max == 0` means unbounded: only a forced flush drains it.
    pub fn new(max: usize) -> Self {
        Self { pending: Vec::with_capacity(max.min(4096)), max }
    }

    /// Queue one insert. Returns the trigger to flush with if the batch just
    /// reached its threshold.
    pub fn push(&mut self, item: T) -> Option<FlushTrigger> {
        debug_assert!(self.max == 0 || self.pending.len() < self.max, "batch overfilled");
        self.pending.push(item);
        self.is_full().then_some(FlushTrigger::Threshold)
    }

    pub fn is_full(&self) -> bool {
        self.max > 0 && self.pending.len() >= self.max
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything pending, leaving the batch empty.
    pub fn take(&mut self) -> Vec<T> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_threshold_exactly_at_max() {
        let mut b = Batch::new(3);
        assert_eq!(b.push(1), None);
        assert_eq!(b.push(2), None);
        assert_eq!(b.push(3), Some(FlushTrigger::Threshold));
        assert_eq!(b.take(), vec![1, 2, 3]);
        assert!(b.is_empty());
        assert_eq!(b.push(4), None);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn zero_max_never_fills() {
        let mut b = Batch::new(0);
        for i in 0..1_000 {
            assert_eq!(b.push(i), None);
        }
        assert_eq!(b.len(), 1_000);
    }
}
