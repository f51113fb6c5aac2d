//! The tabbed list behind "Marmita 1 / Marmita 2 / + Adicionar".

/// Ordered, never-empty list of dish selections with one active entry.
///
/// Invariants, held after every call:
/// - `len() >= 1`
/// - `active_index() < len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections<T> {
    items: Vec<T>,
    active: usize,
}

impl<T: Default> Default for Selections<T> {
    fn default() -> Self {
        Self {
            items: vec![T::default()],
            active: 0,
        }
    }
}

impl<T: Default> Selections<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a blank selection and makes it active. Returns its index.
    pub fn add(&mut self) -> usize {
        self.items.push(T::default());
        self.active = self.items.len() - 1;
        self.active
    }
}

impl<T> Selections<T> {
    /// Removes the selection at `index`.
    ///
    /// Returns false without touching the list when `index` is out of range
    /// or it is the only selection left. The active index is clamped to the
    /// new last entry if it now points past the end.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.items.len() <= 1 || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        if self.active >= self.items.len() {
            self.active = self.items.len() - 1;
        }
        true
    }

    /// Switches the active tab. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &T {
        &self.items[self.active]
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> Selections<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}
