use std::mem;

use crate::models::error::BufferError;

/// Linear staging buffer for the transport <-> device data path.
///
/// Unlike a circular ring, committed data always occupies the contiguous
/// prefix `[0, len)` of the storage: the append destination is always the
/// free suffix and the read region never wraps. The price is an
/// O(remaining) move on [`compact`](Self::compact), which audio pipelines
/// amortize by consuming in large, infrequent batches.
///
/// The buffer is not internally synchronized. The intended usage is one
/// producer appending and one consumer compacting, serialized by the
/// surrounding pipeline; for broader sharing wrap it in
/// `Arc<parking_lot::Mutex<StagingBuffer<T>>>`.
///
/// Dropping the buffer releases its storage; the borrow checker rules out
/// any use after that point.
#[derive(Debug)]
pub struct StagingBuffer<T> {
    data: Box<[T]>,
    tail: usize,
}

impl<T: Copy + Default> StagingBuffer<T> {
    /// Allocate a zero-initialized buffer for `capacity` elements.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| BufferError::Allocation { elements: capacity })?;
        data.resize(capacity, T::default());
        log::debug!(
            "allocated staging buffer: {} elements x {} bytes",
            capacity,
            mem::size_of::<T>()
        );
        Ok(Self {
            data: data.into_boxed_slice(),
            tail: 0,
        })
    }

    /// Size in bytes of one element.
    pub fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Total capacity in elements, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of committed elements available to a consumer.
    pub fn len(&self) -> usize {
        self.tail
    }

    pub fn is_empty(&self) -> bool {
        self.tail == 0
    }

    /// Number of elements a producer may still append before the buffer is full.
    pub fn free_len(&self) -> usize {
        self.data.len() - self.tail
    }

    /// Committed data, in bytes.
    pub fn used_bytes(&self) -> usize {
        self.tail * mem::size_of::<T>()
    }

    /// Free space, in bytes.
    pub fn free_bytes(&self) -> usize {
        self.free_len() * mem::size_of::<T>()
    }

    /// The committed region `[0, len)`.
    pub fn used(&self) -> &[T] {
        &self.data[..self.tail]
    }

    /// Mutable view of the committed region, for in-place processing
    /// (e.g. PCM scaling) while data awaits consumption.
    pub fn used_mut(&mut self) -> &mut [T] {
        &mut self.data[..self.tail]
    }

    /// Mutable view of the free region. A producer writes here, then calls
    /// [`commit`](Self::commit) with the exact element count written.
    pub fn free_space_mut(&mut self) -> &mut [T] {
        &mut self.data[self.tail..]
    }

    /// Mark `n` freshly written elements as committed.
    pub fn commit(&mut self, n: usize) -> Result<(), BufferError> {
        let free = self.free_len();
        if n > free {
            return Err(BufferError::Overflow { requested: n, free });
        }
        self.tail += n;
        Ok(())
    }

    /// Copy `src` into free space and commit it in one step.
    pub fn append(&mut self, src: &[T]) -> Result<(), BufferError> {
        let free = self.free_len();
        if src.len() > free {
            return Err(BufferError::Overflow {
                requested: src.len(),
                free,
            });
        }
        self.data[self.tail..self.tail + src.len()].copy_from_slice(src);
        self.tail += src.len();
        Ok(())
    }

    /// Drop the oldest `n` elements and move the remainder to the front.
    ///
    /// This is how a consumer declares "I have processed this much".
    pub fn compact(&mut self, n: usize) -> Result<(), BufferError> {
        if n > self.tail {
            return Err(BufferError::Range {
                requested: n,
                used: self.tail,
            });
        }
        self.data.copy_within(n..self.tail, 0);
        self.tail -= n;
        Ok(())
    }

    /// Logically empty the buffer without deallocating.
    ///
    /// Equivalent to `compact(len())`.
    pub fn reset(&mut self) {
        self.tail = 0;
    }
}
