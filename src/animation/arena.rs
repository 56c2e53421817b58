//! Generational arena for animated elements.
//!
//! Elements are addressed by [`ElementId`] (slot index plus generation) and
//! can also be looked up by a stable string key. Removing an element bumps
//! its slot's generation, so stale ids resolve to nothing instead of to
//! whatever reuses the slot.

use std::collections::HashMap;

/// Handle to an element in a [`TargetArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    index: u32,
    generation: u32,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    entry: Option<(String, T)>,
}

/// Arena of values keyed by generational ids and by string key.
#[derive(Debug)]
pub struct TargetArena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    keys: HashMap<String, ElementId>,
}

impl<T> Default for TargetArena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            keys: HashMap::new(),
        }
    }
}

impl<T> TargetArena<T> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`. An existing element with the same key is
    /// removed first and returned alongside the new id.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> (ElementId, Option<T>) {
        let key = key.into();
        let replaced = self.id_of(&key).and_then(|id| self.remove(id));

        let id = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entry = Some((key.clone(), value));
            ElementId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 0,
                entry: Some((key.clone(), value)),
            });
            ElementId {
                index,
                generation: 0,
            }
        };
        self.keys.insert(key, id);
        (id, replaced)
    }

    /// Remove an element. Stale ids return `None`.
    pub fn remove(&mut self, id: ElementId) -> Option<T> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let (key, value) = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.keys.remove(&key);
        Some(value)
    }

    /// Look up an element.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&T> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_ref().map(|(_, v)| v)
    }

    /// Look up an element mutably.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut T> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_mut().map(|(_, v)| v)
    }

    /// Resolve a stable key to the element's current id.
    #[must_use]
    pub fn id_of(&self, key: &str) -> Option<ElementId> {
        self.keys.get(key).copied()
    }

    /// Look up an element by key.
    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<&T> {
        self.id_of(key).and_then(|id| self.get(id))
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when the arena holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Live elements in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &str, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            let (key, value) = slot.entry.as_ref()?;
            let id = ElementId {
                index: u32::try_from(i).ok()?,
                generation: slot.generation,
            };
            Some((id, key.as_str(), value))
        })
    }

    /// Live elements in slot order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ElementId, &str, &mut T)> {
        self.slots.iter_mut().enumerate().filter_map(|(i, slot)| {
            let generation = slot.generation;
            let (key, value) = slot.entry.as_mut()?;
            let id = ElementId {
                index: u32::try_from(i).ok()?,
                generation,
            };
            Some((id, key.as_str(), value))
        })
    }

    /// Remove every element, invalidating all ids.
    pub fn clear(&mut self) {
        let ids: Vec<ElementId> = self.keys.values().copied().collect();
        for id in ids {
            self.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut arena = TargetArena::new();
        let (a, _) = arena.insert("hero.title", 1);
        let (b, _) = arena.insert("hero.subtitle", 2);
        assert_eq!(arena.get(a), Some(&1));
        assert_eq!(arena.by_key("hero.subtitle"), Some(&2));
        assert_eq!(arena.id_of("hero.subtitle"), Some(b));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_stale_id_after_reuse() {
        let mut arena = TargetArena::new();
        let (a, _) = arena.insert("a", 1);
        assert_eq!(arena.remove(a), Some(1));
        let (b, _) = arena.insert("b", 2);
        assert_ne!(a, b);
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.get(b), Some(&2));
    }

    #[test]
    fn test_same_key_replaces() {
        let mut arena = TargetArena::new();
        let (a, _) = arena.insert("card", 1);
        let (b, old) = arena.insert("card", 5);
        assert_eq!(old, Some(1));
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(b), Some(&5));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_clear_invalidates() {
        let mut arena = TargetArena::new();
        let ids: Vec<_> = (0..3).map(|i| arena.insert(format!("k{i}"), i).0).collect();
        arena.clear();
        assert!(arena.is_empty());
        assert!(ids.iter().all(|id| arena.get(*id).is_none()));
        assert_eq!(arena.iter().count(), 0);
    }
}
