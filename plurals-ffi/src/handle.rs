//! Generational handle table.
//!
//! A handle packs a slot index and the slot's generation into a positive
//! `i64`:
//!
//! ```text
//!  63      32 31        0
//! +----------+-----------+
//! |generation| index + 1 |
//! +----------+-----------+
//! ```
//!
//! Releasing a slot bumps its generation, so a released handle never matches
//! the slot again even after the slot is reused. A slot whose generation has
//! run out is retired instead of reused. Zero is never issued.

use std::sync::Arc;
use thiserror::Error;

/// Opaque handle given to foreign callers.
pub type Handle = i64;

const INDEX_MASK: i64 = 0xffff_ffff;
const MAX_GENERATION: u32 = i32::MAX as u32;
/// Generation of a retired slot; no handle carries it.
const RETIRED: u32 = MAX_GENERATION + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandleError {
    /// The handle was never issued by this registry
    #[error("invalid handle {0}")]
    InvalidHandle(Handle),

    /// The handle was issued and has since been released
    #[error("handle {0} was already released")]
    AlreadyReleased(Handle),

    /// Every slot up to the configured capacity is live
    #[error("handle limit of {0} reached")]
    LimitReached(usize),
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<Arc<T>>,
}

/// Table of live values addressed by [`Handle`]s.
#[derive(Debug)]
pub struct HandleRegistry<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    capacity: usize,
    live: usize,
}

impl<T> HandleRegistry<T> {
    /// A registry holding at most `capacity` live values.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            capacity: capacity.min(INDEX_MASK as usize),
            live: 0,
        }
    }

    /// Store a value and issue a handle for it.
    pub fn insert(&mut self, value: T) -> Result<Handle, HandleError> {
        self.insert_shared(Arc::new(value))
    }

    /// Store a shared value and issue a handle for it.
    pub fn insert_shared(&mut self, value: Arc<T>) -> Result<Handle, HandleError> {
        if self.live >= self.capacity {
            return Err(HandleError::LimitReached(self.capacity));
        }

        let index = match self.free.pop() {
            Some(index) => index,
            None if self.slots.len() >= INDEX_MASK as usize => {
                return Err(HandleError::LimitReached(self.capacity));
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    value: None,
                });
                self.slots.len() - 1
            }
        };

        let slot = &mut self.slots[index];
        slot.value = Some(value);
        self.live += 1;
        Ok(encode(index, slot.generation))
    }

    /// The value behind a live handle.
    pub fn get(&self, handle: Handle) -> Result<Arc<T>, HandleError> {
        let index = self.check(handle)?;
        self.slots[index]
            .value
            .clone()
            .ok_or(HandleError::InvalidHandle(handle))
    }

    /// Release a handle, returning its value.
    ///
    /// Releasing the same handle twice is reported as
    /// [`HandleError::AlreadyReleased`].
    pub fn remove(&mut self, handle: Handle) -> Result<Arc<T>, HandleError> {
        let index = self.check(handle)?;
        let slot = &mut self.slots[index];
        let value = slot.value.take().ok_or(HandleError::InvalidHandle(handle))?;

        if slot.generation >= MAX_GENERATION {
            slot.generation = RETIRED;
        } else {
            slot.generation += 1;
            self.free.push(index);
        }
        self.live -= 1;
        Ok(value)
    }

    /// Number of live handles.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slot index of a handle whose generation matches its slot.
    fn check(&self, handle: Handle) -> Result<usize, HandleError> {
        let (index, generation) = decode(handle).ok_or(HandleError::InvalidHandle(handle))?;
        let slot = self
            .slots
            .get(index)
            .ok_or(HandleError::InvalidHandle(handle))?;

        if generation == slot.generation {
            Ok(index)
        } else if generation < slot.generation {
            Err(HandleError::AlreadyReleased(handle))
        } else {
            Err(HandleError::InvalidHandle(handle))
        }
    }
}

impl<T> Default for HandleRegistry<T> {
    fn default() -> Self {
        Self::new(usize::MAX)
    }
}

fn encode(index: usize, generation: u32) -> Handle {
    (i64::from(generation) << 32) | (index as i64 + 1)
}

fn decode(handle: Handle) -> Option<(usize, u32)> {
    if handle <= 0 {
        return None;
    }
    let low = handle & INDEX_MASK;
    if low == 0 {
        return None;
    }
    let generation = u32::try_from(handle >> 32).ok()?;
    Some(((low - 1) as usize, generation))
}
