//! Counting gate: wait until a slot is free, then hold it until the guard drops.

use std::sync::{Condvar, Mutex};

/// Counting gate with a fixed number of slots. [`acquire`](Gate::acquire)
/// blocks while every slot is held; dropping the returned [`Slot`] frees one
/// slot and wakes a waiter.
pub struct Gate {
    active: Mutex<usize>,
    freed: Condvar,
    capacity: usize,
}

impl Gate {
    /// Create a gate with `capacity` slots. Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "gate capacity must be greater than 0");
        Self {
            active: Mutex::new(0),
            freed: Condvar::new(),
            capacity,
        }
    }

    /// Block until a slot is free, then take it.
    pub fn acquire(&self) -> Slot<'_> {
        let mut active = self.active.lock().unwrap();
        while *active >= self.capacity {
            active = self.freed.wait(active).unwrap();
        }
        *active += 1;
        Slot(self)
    }

    /// Number of slots this gate was created with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// One held slot of a [`Gate`]. Freed on drop; the drop also runs while the
/// holding thread unwinds from a panic, so a faulting holder does not shrink
/// the gate.
pub struct Slot<'a>(&'a Gate);

impl Drop for Slot<'_> {
    fn drop(&mut self) {
        let mut active = self.0.active.lock().unwrap();
        *active = active.saturating_sub(1);
        self.0.freed.notify_one();
    }
}
