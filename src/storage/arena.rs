use std::{iter::FusedIterator, marker::PhantomData, mem};

use crate::core::id::IdType;

/// Slot storage with generation-checked handles that also remembers insertion
/// order.
///
/// Live slots are threaded into a doubly linked list in the order of
/// insertion, vacant slots form a free list that is consumed before the
/// backing vector grows. Each removal bumps the generation of the slot, a slot
/// whose generation cannot be bumped anymore is retired for good.
#[derive(Debug, Clone)]
pub struct Arena<I, T> {
    slots: Vec<Slot<T>>,
    free: Option<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
    ty: PhantomData<fn() -> I>,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied {
        value: T,
        prev: Option<u32>,
        next: Option<u32>,
    },
    Vacant {
        next_free: Option<u32>,
    },
    Retired,
}

impl<I: IdType, T> Arena<I, T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            head: None,
            tail: None,
            len: 0,
            ty: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: I) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: I) -> Option<&T> {
        let slot = self.slots.get(id.as_usize())?;
        match &slot.entry {
            Entry::Occupied { value, .. } if slot.generation == id.generation() => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        let slot = self.slots.get_mut(id.as_usize())?;
        match &mut slot.entry {
            Entry::Occupied { value, .. } if slot.generation == id.generation() => Some(value),
            _ => None,
        }
    }

    /// Appends the value at the end of the insertion order. Gives the value
    /// back if there is no slot left.
    pub fn try_insert(&mut self, value: T) -> Result<I, T> {
        let index = match self.free {
            Some(index) => {
                let slot = &self.slots[index as usize];
                match slot.entry {
                    Entry::Vacant { next_free } => self.free = next_free,
                    _ => unreachable!("free list contains a non-vacant slot"),
                }
                index
            }
            None => {
                // Index `u32::MAX` is reserved for the sentinel.
                let index = match u32::try_from(self.slots.len()) {
                    Ok(index) if index != u32::MAX => index,
                    _ => return Err(value),
                };
                self.slots.push(Slot {
                    generation: 0,
                    entry: Entry::Vacant { next_free: None },
                });
                index
            }
        };

        let slot = &mut self.slots[index as usize];
        slot.entry = Entry::Occupied {
            value,
            prev: self.tail,
            next: None,
        };
        let generation = slot.generation;

        match self.tail {
            Some(tail) => self.set_next(tail, Some(index)),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;

        Ok(I::new(index, generation))
    }

    pub fn remove(&mut self, id: I) -> Option<T> {
        self.get(id)?;

        let index = id.index();
        let slot = &mut self.slots[index as usize];

        let vacated = match slot.generation.checked_add(1) {
            Some(generation) => {
                slot.generation = generation;
                Entry::Vacant {
                    next_free: self.free,
                }
            }
            None => Entry::Retired,
        };

        let reusable = matches!(vacated, Entry::Vacant { .. });
        let Entry::Occupied { value, prev, next } = mem::replace(&mut slot.entry, vacated) else {
            unreachable!("slot checked to be occupied");
        };

        if reusable {
            self.free = Some(index);
        }

        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.set_prev(next, prev),
            None => self.tail = prev,
        }
        self.len -= 1;

        Some(value)
    }

    /// Removes all values for which `keep` returns `false`, walking them in
    /// insertion order. Returns the number of removed values.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(I, &T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let slot = &self.slots[index as usize];
            let Entry::Occupied { value, next, .. } = &slot.entry else {
                unreachable!("insertion order list contains a non-occupied slot");
            };

            let id = I::new(index, slot.generation);
            cursor = *next;

            if !keep(id, value) {
                self.remove(id);
                removed += 1;
            }
        }

        removed
    }

    /// Removes all values. Handles issued before are invalidated, the slots
    /// are kept for reuse.
    pub fn clear(&mut self) {
        self.free = None;

        // Building the free list backwards makes the lowest slots reused first.
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if let Entry::Occupied { .. } = slot.entry {
                match slot.generation.checked_add(1) {
                    Some(generation) => slot.generation = generation,
                    None => {
                        slot.entry = Entry::Retired;
                        continue;
                    }
                }
            }

            if let Entry::Retired = slot.entry {
                continue;
            }

            slot.entry = Entry::Vacant {
                next_free: self.free,
            };
            self.free = Some(index as u32);
        }

        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, I, T> {
        Iter {
            slots: &self.slots,
            next: self.head,
            remaining: self.len,
            ty: PhantomData,
        }
    }

    fn set_next(&mut self, index: u32, link: Option<u32>) {
        if let Entry::Occupied { next, .. } = &mut self.slots[index as usize].entry {
            *next = link;
        }
    }

    fn set_prev(&mut self, index: u32, link: Option<u32>) {
        if let Entry::Occupied { prev, .. } = &mut self.slots[index as usize].entry {
            *prev = link;
        }
    }
}

impl<I: IdType, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the values of an [`Arena`] in insertion order.
#[derive(Debug)]
pub struct Iter<'a, I, T> {
    slots: &'a [Slot<T>],
    next: Option<u32>,
    remaining: usize,
    ty: PhantomData<fn() -> I>,
}

impl<'a, I: IdType, T> Iterator for Iter<'a, I, T> {
    type Item = (I, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let slot = &self.slots[index as usize];

        match &slot.entry {
            Entry::Occupied { value, next, .. } => {
                self.next = *next;
                self.remaining -= 1;
                Some((I::new(index, slot.generation), value))
            }
            _ => {
                self.next = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, I: IdType, T> ExactSizeIterator for Iter<'a, I, T> {}

impl<'a, I: IdType, T> FusedIterator for Iter<'a, I, T> {}

impl<'a, I, T> Clone for Iter<'a, I, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            next: self.next,
            remaining: self.remaining,
            ty: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id::VertexId;

    fn values(arena: &Arena<VertexId, char>) -> Vec<char> {
        arena.iter().map(|(_, value)| *value).collect()
    }

    #[test]
    fn insert_get_remove() {
        let mut arena = Arena::<VertexId, _>::new();

        let a = arena.try_insert('a').unwrap();
        let b = arena.try_insert('b').unwrap();

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&'a'));
        assert_eq!(arena.get(b), Some(&'b'));

        assert_eq!(arena.remove(a), Some('a'));
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.len(), 1);
        assert_eq!(values(&arena), vec!['b']);
    }

    #[test]
    fn reused_slot_rejects_stale_id() {
        let mut arena = Arena::<VertexId, _>::new();

        let a = arena.try_insert('a').unwrap();
        arena.remove(a);
        let b = arena.try_insert('b').unwrap();

        assert_eq!(a.index(), b.index());
        assert_ne!(a, b);
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(b), Some(&'b'));
        assert!(arena.get_mut(a).is_none());
    }

    #[test]
    fn order_survives_slot_reuse() {
        let mut arena = Arena::<VertexId, _>::new();

        let a = arena.try_insert('a').unwrap();
        arena.try_insert('b').unwrap();
        let c = arena.try_insert('c').unwrap();

        arena.remove(a);
        arena.try_insert('d').unwrap();
        arena.remove(c);
        arena.try_insert('e').unwrap();

        assert_eq!(values(&arena), vec!['b', 'd', 'e']);
        assert_eq!(arena.iter().len(), 3);
    }

    #[test]
    fn retain_in_order() {
        let mut arena = Arena::<VertexId, _>::new();

        for value in "abcdef".chars() {
            arena.try_insert(value).unwrap();
        }

        let mut visited = Vec::new();
        let removed = arena.retain(|_, value| {
            visited.push(*value);
            !matches!(value, 'a' | 'c' | 'f')
        });

        assert_eq!(removed, 3);
        assert_eq!(visited, "abcdef".chars().collect::<Vec<_>>());
        assert_eq!(values(&arena), vec!['b', 'd', 'e']);
    }

    #[test]
    fn clear_invalidates_ids() {
        let mut arena = Arena::<VertexId, _>::new();

        let a = arena.try_insert('a').unwrap();
        let b = arena.try_insert('b').unwrap();
        arena.remove(b);

        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.iter().next(), None);

        let c = arena.try_insert('c').unwrap();
        let d = arena.try_insert('d').unwrap();
        assert_eq!(c.index(), 0);
        assert_eq!(d.index(), 1);
        assert_ne!(c, a);
        assert_eq!(values(&arena), vec!['c', 'd']);
    }

    #[test]
    fn exhausted_generation_retires_slot() {
        let mut arena = Arena::<VertexId, _>::new();

        let a = arena.try_insert('a').unwrap();
        arena.slots[a.as_usize()].generation = u32::MAX;
        let a = VertexId::new(a.index(), u32::MAX);

        assert_eq!(arena.remove(a), Some('a'));
        assert_eq!(arena.get(a), None);

        let b = arena.try_insert('b').unwrap();
        assert_ne!(b.index(), a.index());
        assert_eq!(values(&arena), vec!['b']);
    }
}
