/// Open/closed flags for the resource accordion.
///
/// Entries are not exclusive: any number may be open at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDisclosure {
    open: Vec<bool>,
}

impl ResourceDisclosure {
    #[must_use]
    pub fn new(resource_count: usize) -> Self {
        Self {
            open: vec![false; resource_count],
        }
    }

    /// Flips entry `index`. Returns `false` when the index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.open.get_mut(index) {
            Some(open) => {
                *open = !*open;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|open| **open).count()
    }
}
