use std::mem;

pub const DEFAULT_CAPACITY: usize = 16384;

const PRIMARY_BASE: u64 = 37;
const STEP_BASE: u64 = 53;

#[derive(Debug)]
enum Slot<V> {
    Empty,
    Occupied { key: String, value: V },
}

/// String-keyed open-addressing table with double hashing.
///
/// The table doubles before an insert whenever it is at least half full, so
/// lookups always reach an empty slot or the key. Iteration follows slot order,
/// which depends on capacity and insertion history but never on anything else.
///
/// There is no removal operation, so slots are never tombstoned.
#[derive(Debug)]
pub struct ProbeTable<V> {
    slots: Vec<Slot<V>>,
    count: usize,
}

impl<V> ProbeTable<V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Capacities below 2 are raised to 2 so the step hash has a valid range.
    pub fn with_capacity(capacity: usize) -> Self {
        ProbeTable {
            slots: empty_slots(capacity.max(2)),
            count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Insert or overwrite. Never drops an entry: if the probe sequence is
    /// exhausted the table grows and the insert is retried.
    pub fn insert(&mut self, key: &str, value: V) {
        if self.count * 2 >= self.capacity() {
            self.grow();
        }

        loop {
            match self.probe(key, true) {
                Some(idx) => {
                    let slot = &mut self.slots[idx];
                    if let Slot::Occupied { value: existing, .. } = slot {
                        *existing = value;
                    } else {
                        *slot = Slot::Occupied { key: key.to_string(), value };
                        self.count += 1;
                    }
                    return;
                }
                None => self.grow(),
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let idx = self.probe(key, false)?;
        match &self.slots[idx] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Empty => None,
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = self.probe(key, false)?;
        match &mut self.slots[idx] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Empty => None,
        }
    }

    /// Live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key.as_str(), value)),
            Slot::Empty => None,
        })
    }

    pub fn iterate<F>(&self, mut visitor: F)
    where
        F: FnMut(&str, &V),
    {
        for (key, value) in self.iter() {
            visitor(key, value);
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Walk the probe sequence for `key`. Returns the slot holding the key, or
    /// (when `stop_at_empty`) the first empty slot. A lookup that meets an
    /// empty slot is a definitive miss.
    fn probe(&self, key: &str, stop_at_empty: bool) -> Option<usize> {
        let capacity = self.capacity();
        let h1 = self.hash1(key);
        let h2 = self.hash2(key);

        // idx_i = (h1 + i * h2) mod capacity
        let mut idx = h1;
        for _ in 0..capacity {
            match &self.slots[idx] {
                Slot::Empty => return if stop_at_empty { Some(idx) } else { None },
                Slot::Occupied { key: existing, .. } if existing == key => return Some(idx),
                Slot::Occupied { .. } => {}
            }
            idx = (idx + h2) % capacity;
        }

        None
    }

    pub(crate) fn hash1(&self, key: &str) -> usize {
        (polynomial_hash(key, PRIMARY_BASE) % self.capacity() as u64) as usize
    }

    /// Always in `[1, capacity - 1]`.
    pub(crate) fn hash2(&self, key: &str) -> usize {
        (polynomial_hash(key, STEP_BASE) % (self.capacity() as u64 - 1) + 1) as usize
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity() * 2;
        let old_slots = mem::replace(&mut self.slots, empty_slots(new_capacity));
        self.count = 0;

        log::debug!("probe table growing to {} slots", new_capacity);

        for slot in old_slots {
            if let Slot::Occupied { key, value } = slot {
                self.insert(&key, value);
            }
        }
    }
}

impl<V: Clone> ProbeTable<V> {
    /// Copying lookup.
    pub fn find(&self, key: &str) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<V> Default for ProbeTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    (0..capacity).map(|_| Slot::Empty).collect()
}

// h = h * base + byte, wrapping at 64 bits.
fn polynomial_hash(key: &str, base: u64) -> u64 {
    key.bytes()
        .fold(0u64, |h, b| h.wrapping_mul(base).wrapping_add(b as u64))
}
