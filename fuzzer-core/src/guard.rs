//! Verification scratch with a sentinel cell past the logical end.
//!
//! A [`GuardedView`] exposes exactly `len` slots to the codec and owns the
//! slot right after them. The sentinel is rewritten every time a view is
//! armed, so its check does not rely on what earlier rounds left behind.

/// Value placed in the sentinel slot.
pub const SENTINEL: u16 = 1024 + 250;

/// Reusable decompression destination.
#[derive(Debug, Clone)]
pub struct GuardedBuffer {
    slots: Vec<u16>,
}

impl GuardedBuffer {
    /// Allocates room for views of up to `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity + 1],
        }
    }

    /// Largest view length [`GuardedBuffer::arm`] accepts.
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Places the sentinel right after `len` slots and returns the view.
    ///
    /// Returns `None` if `len` exceeds the capacity.
    pub fn arm(&mut self, len: usize) -> Option<GuardedView<'_>> {
        let region = self.slots.get_mut(..=len)?;
        region[len] = SENTINEL;
        Some(GuardedView { region })
    }
}

/// `len` writable slots followed by an owned sentinel.
#[derive(Debug)]
pub struct GuardedView<'a> {
    region: &'a mut [u16],
}

impl GuardedView<'_> {
    /// Number of slots handed to the codec.
    pub fn len(&self) -> usize {
        self.region.len() - 1
    }

    /// True for a zero-length view.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The writable slots, excluding the sentinel.
    pub fn as_mut_slice(&mut self) -> &mut [u16] {
        let len = self.len();
        &mut self.region[..len]
    }

    /// The writable slots, excluding the sentinel.
    pub fn as_slice(&self) -> &[u16] {
        &self.region[..self.len()]
    }

    /// True while the slot past the view still holds [`SENTINEL`].
    pub fn sentinel_intact(&self) -> bool {
        self.region[self.len()] == SENTINEL
    }
}
