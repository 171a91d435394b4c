//! The object table: handles for live runtime references.
//!
//! Slots are never relocated; a handle stays valid until the driver frees
//! it. Vacated slots are recycled first-in-first-out so consecutive admits
//! produce predictable handles. The identity map keys on the reference's
//! address, which is stable and unambiguous exactly as long as the slot
//! keeps the reference alive; freeing a slot removes the entry in the same
//! step, so no dangling identity survives.

use std::collections::VecDeque;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tether_runtime::ObjRef;

use crate::error::WorkerError;

/// Process-wide mapping from non-negative handles to live references.
#[derive(Default)]
pub struct ObjectTable {
    slots: Vec<Option<ObjRef>>,
    free: VecDeque<usize>,
    by_identity: FxHashMap<usize, i32>,
}

fn identity(obj: &ObjRef) -> usize {
    Rc::as_ptr(obj) as usize
}

impl ObjectTable {
    pub fn new() -> Self {
        ObjectTable::default()
    }

    /// Admit a reference, returning its handle.
    ///
    /// Re-admitting a reference already in the table returns the handle it
    /// already holds. Otherwise the head of the free list is reused, or a
    /// fresh slot is appended.
    pub fn admit(&mut self, obj: ObjRef) -> i32 {
        if let Some(&handle) = self.by_identity.get(&identity(&obj)) {
            return handle;
        }
        let index = match self.free.pop_front() {
            Some(index) => {
                self.slots[index] = Some(obj.clone());
                index
            }
            None => {
                self.slots.push(Some(obj.clone()));
                self.slots.len() - 1
            }
        };
        let handle = index as i32;
        self.by_identity.insert(identity(&obj), handle);
        handle
    }

    /// Vacate a slot and queue it for reuse.
    pub fn free(&mut self, handle: i32) -> Result<(), WorkerError> {
        let index = self.slot_index(handle)?;
        match self.slots[index].take() {
            Some(obj) => {
                self.by_identity.remove(&identity(&obj));
                self.free.push_back(index);
                Ok(())
            }
            None => Err(WorkerError::VacantHandle(handle)),
        }
    }

    /// Look up the reference a handle names.
    pub fn resolve(&self, handle: i32) -> Result<ObjRef, WorkerError> {
        let index = self.slot_index(handle)?;
        self.slots[index]
            .clone()
            .ok_or(WorkerError::VacantHandle(handle))
    }

    fn slot_index(&self, handle: i32) -> Result<usize, WorkerError> {
        usize::try_from(handle)
            .ok()
            .filter(|&i| i < self.slots.len())
            .ok_or(WorkerError::InvalidHandle(handle))
    }

    /// Number of occupied slots.
    pub fn live(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
