//! Generational arena for server-fed entity collections
//!
//! Entries are keyed by their server id and addressed by [`EntityHandle`]s.
//! Removing an entry bumps its slot generation, so a handle taken before the
//! removal resolves to `None` instead of aliasing whatever reuses the slot.

use std::collections::HashMap;
use std::hash::Hash;

/// Stable reference to a store slot at a given generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle {
    index: u32,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Slot<K, T> {
    generation: u32,
    entry: Option<(K, T)>,
}

/// Arena of entities keyed by server id
#[derive(Debug, Clone)]
pub struct EntityStore<K, T> {
    slots: Vec<Slot<K, T>>,
    free: Vec<u32>,
    index: HashMap<K, EntityHandle>,
}

impl<K, T> Default for EntityStore<K, T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash, T> EntityStore<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Insert a fresh entity under `key`
    ///
    /// An existing entry with the same key is removed first, so the new
    /// entity always lives at a new generation.
    pub fn insert(&mut self, key: K, value: T) -> EntityHandle {
        self.remove(&key);
        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.entry = Some((key, value));
                EntityHandle {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some((key, value)),
                });
                EntityHandle {
                    index,
                    generation: 0,
                }
            }
        };
        self.index.insert(key, handle);
        handle
    }

    /// Remove the entity under `key`, invalidating its handle
    pub fn remove(&mut self, key: &K) -> Option<T> {
        let handle = self.index.remove(key)?;
        let slot = &mut self.slots[handle.index as usize];
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        slot.entry.take().map(|(_, value)| value)
    }

    pub fn handle_of(&self, key: &K) -> Option<EntityHandle> {
        self.index.get(key).copied()
    }

    pub fn get(&self, handle: EntityHandle) -> Option<&T> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.entry.as_ref().map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.entry.as_mut().map(|(_, value)| value)
    }

    /// Key stored at `handle`, if the handle is still live
    pub fn key(&self, handle: EntityHandle) -> Option<K> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.entry.as_ref().map(|(key, _)| *key)
    }

    pub fn get_by_key(&self, key: &K) -> Option<&T> {
        self.handle_of(key).and_then(|h| self.get(h))
    }

    pub fn get_by_key_mut(&mut self, key: &K) -> Option<&mut T> {
        let handle = self.handle_of(key)?;
        self.get_mut(handle)
    }

    /// Handles of every live entry, in slot order
    ///
    /// Take this at the start of a scan; entries removed afterwards simply
    /// fail to resolve, entries added afterwards are not visited.
    pub fn snapshot(&self) -> Vec<EntityHandle> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.entry.is_some())
            .map(|(index, slot)| EntityHandle {
                index: index as u32,
                generation: slot.generation,
            })
            .collect()
    }
}
