use bytes::Bytes;

/// Fixed-size, index-addressed storage for fetched bodies.
///
/// Each slot is written at most once. The bodies can only be taken out once
/// every slot is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSlots {
    slots:  Vec<Option<Bytes>>,
    filled: usize,
}

impl ResultSlots {
    pub fn new(len: usize) -> Self {
        Self {
            slots:  vec![None; len],
            filled: 0,
        }
    }

    pub fn len(&self) -> usize { self.slots.len() }

    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    pub fn filled(&self) -> usize { self.filled }

    pub fn is_complete(&self) -> bool { self.filled == self.slots.len() }

    /// Stores `body` at `index`.
    ///
    /// Returns `false` if the index is out of range or already filled, in
    /// which case the slot is left untouched.
    pub fn fill(&mut self, index: usize, body: Bytes) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(body);
        self.filled += 1;
        true
    }

    /// Returns the bodies in original index order, or `None` while any slot
    /// is still empty.
    pub fn into_bodies(self) -> Option<Vec<Bytes>> {
        if !self.is_complete() {
            return None;
        }
        self.slots.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_each_slot_once() {
        let mut slots = ResultSlots::new(2);
        assert!(slots.fill(1, Bytes::from_static(b"b")));
        assert!(!slots.fill(1, Bytes::from_static(b"again")));
        assert_eq!(slots.filled(), 1);
        assert!(!slots.is_complete());
    }

    #[test]
    fn test_fill_out_of_range() {
        let mut slots = ResultSlots::new(1);
        assert!(!slots.fill(1, Bytes::from_static(b"x")));
        assert_eq!(slots.filled(), 0);
    }

    #[test]
    fn test_into_bodies_requires_every_slot() {
        let mut slots = ResultSlots::new(2);
        slots.fill(1, Bytes::from_static(b"b"));
        assert!(slots.clone().into_bodies().is_none());

        slots.fill(0, Bytes::from_static(b"a"));
        let bodies = slots.into_bodies().unwrap();
        assert_eq!(bodies, vec![Bytes::from_static(b"a"), Bytes::from_static(b"b")]);
    }

    #[test]
    fn test_empty_slots_are_complete() {
        let slots = ResultSlots::new(0);
        assert!(slots.is_empty());
        assert_eq!(slots.into_bodies(), Some(Vec::new()));
    }
}
