use core::num::NonZero;

#[cfg(test)]
type Slot = u16;
#[cfg(not(test))]
type Slot = u32;

/// Names one node slot in the arena.
///
/// The slot number is kept one higher than the index inside a `NonZero`, so the
/// tree's sentinel link `Option<Handle>` is no wider than a `Handle`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<Slot>);

impl Handle {
    /// Highest slot index a handle can name.
    pub(crate) const MAX: usize = (Slot::MAX - 1) as usize;

    /// Returns the handle for slot `index`, or `None` once the arena has run out
    /// of addressable slots.
    #[inline]
    pub(crate) const fn new(index: usize) -> Option<Self> {
        if index > Self::MAX {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let slot = (index + 1) as Slot;
        match NonZero::new(slot) {
            Some(slot) => Some(Self(slot)),
            None => None,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
