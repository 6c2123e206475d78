// arena.rs - Fixed-capacity bump arena for the simulation's grids

use crate::error::{LifeError, Result};

/// A contiguous run of slots handed out by [`Arena::carve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub offset: usize,
    pub len: usize,
}

impl Region {
    fn end(self) -> usize {
        self.offset + self.len
    }
}

/// Owned storage carved sequentially and never freed piecemeal.
///
/// The backing storage is allocated once at `capacity` slots; carving only
/// advances `used`. [`Arena::reset`] rewinds the whole block.
pub struct Arena<T> {
    storage: Vec<T>,
    used: usize,
    initialized: bool,
}

impl<T: Copy + Default> Arena<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![T::default(); capacity],
            used: 0,
            initialized: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Take the next `count` slots. Fails without carving anything when the
    /// request does not fit.
    pub fn carve(&mut self, count: usize) -> Result<Region> {
        let end = self
            .used
            .checked_add(count)
            .filter(|&end| end <= self.capacity())
            .ok_or(LifeError::ArenaExhausted {
                requested: count,
                used: self.used,
                capacity: self.capacity(),
            })?;

        let region = Region {
            offset: self.used,
            len: count,
        };
        self.used = end;
        tracing::debug!(offset = region.offset, len = count, used = self.used, "carved arena region");
        Ok(region)
    }

    /// Rewind to an empty, uninitialized arena. Previously carved regions
    /// must not be used afterwards.
    pub fn reset(&mut self) {
        self.used = 0;
        self.initialized = false;
    }

    pub fn slice(&self, region: Region) -> &[T] {
        &self.storage[region.offset..region.end()]
    }

    pub fn slice_mut(&mut self, region: Region) -> &mut [T] {
        &mut self.storage[region.offset..region.end()]
    }

    /// Borrow two disjoint regions mutably at once.
    ///
    /// # Panics
    /// If the regions overlap.
    pub fn pair_mut(&mut self, a: Region, b: Region) -> (&mut [T], &mut [T]) {
        assert!(
            a.end() <= b.offset || b.end() <= a.offset,
            "arena regions overlap: {a:?} and {b:?}"
        );
        if a.end() <= b.offset {
            let (head, tail) = self.storage.split_at_mut(b.offset);
            (&mut head[a.offset..a.end()], &mut tail[..b.len])
        } else {
            let (head, tail) = self.storage.split_at_mut(a.offset);
            (&mut tail[..a.len], &mut head[b.offset..b.end()])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carves_sequential_regions() {
        let mut arena = Arena::<bool>::with_capacity(10);
        let a = arena.carve(4).unwrap();
        let b = arena.carve(6).unwrap();
        assert_eq!(a, Region { offset: 0, len: 4 });
        assert_eq!(b, Region { offset: 4, len: 6 });
        assert_eq!(arena.used(), 10);
    }

    #[test]
    fn overflow_is_an_error_and_carves_nothing() {
        let mut arena = Arena::<bool>::with_capacity(8);
        arena.carve(5).unwrap();
        match arena.carve(4) {
            Err(LifeError::ArenaExhausted {
                requested,
                used,
                capacity,
            }) => {
                assert_eq!((requested, used, capacity), (4, 5, 8));
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
        assert_eq!(arena.used(), 5);
        assert!(arena.carve(usize::MAX).is_err());
    }

    #[test]
    fn reset_rewinds_and_clears_initialized() {
        let mut arena = Arena::<bool>::with_capacity(4);
        arena.carve(4).unwrap();
        arena.mark_initialized();
        arena.reset();
        assert_eq!(arena.used(), 0);
        assert!(!arena.is_initialized());
        assert!(arena.carve(4).is_ok());
    }

    #[test]
    fn pair_mut_hands_out_disjoint_slices_in_either_order() {
        let mut arena = Arena::<u8>::with_capacity(6);
        let a = arena.carve(3).unwrap();
        let b = arena.carve(3).unwrap();
        {
            let (second, first) = arena.pair_mut(b, a);
            second.fill(2);
            first.fill(1);
        }
        assert_eq!(arena.slice(a), &[1, 1, 1]);
        assert_eq!(arena.slice(b), &[2, 2, 2]);
    }

    #[test]
    #[should_panic(expected = "overlap")]
    fn pair_mut_rejects_overlap() {
        let mut arena = Arena::<u8>::with_capacity(6);
        let a = Region { offset: 0, len: 4 };
        let b = Region { offset: 2, len: 4 };
        let _ = arena.pair_mut(a, b);
    }
}
