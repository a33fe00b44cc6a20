//! Single-occupant holder for transient overlays (tooltip, footer notice).
//!
//! Showing a new value hands back the previous one for removal. Each value
//! gets a [`SlotId`] so a delayed dismissal only removes the value it was
//! armed for, never a newer one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(u64);

#[derive(Debug)]
pub struct Slot<T> {
    current: Option<(SlotId, T)>,
    next_id: u64,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            current: None,
            next_id: 1,
        }
    }
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, returning its id and whatever it displaced.
    pub fn show(&mut self, value: T) -> (SlotId, Option<T>) {
        let id = self.reserve();
        self.store(id, value)
    }

    /// Like [`Slot::show`] for values that need their own id up front, such
    /// as a close handler that dismisses itself. A failed `make` consumes no
    /// id and leaves the current value in place.
    pub fn show_with<E>(
        &mut self,
        make: impl FnOnce(SlotId) -> Result<T, E>,
    ) -> Result<(SlotId, Option<T>), E> {
        let id = SlotId(self.next_id);
        let value = make(id)?;
        self.next_id += 1;
        Ok(self.store(id, value))
    }

    fn reserve(&mut self) -> SlotId {
        let id = SlotId(self.next_id);
        self.next_id += 1;
        id
    }

    fn store(&mut self, id: SlotId, value: T) -> (SlotId, Option<T>) {
        let previous = self.current.replace((id, value)).map(|(_, v)| v);
        (id, previous)
    }

    pub fn take(&mut self) -> Option<T> {
        self.current.take().map(|(_, v)| v)
    }

    pub fn take_if_current(&mut self, id: SlotId) -> Option<T> {
        match &self.current {
            Some((current, _)) if *current == id => self.take(),
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref().map(|(_, v)| v)
    }

    pub fn current_id(&self) -> Option<SlotId> {
        self.current.as_ref().map(|(id, _)| *id)
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
