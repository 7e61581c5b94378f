use droplet_dash_provider::Droplet;

/// Ordered droplets from the latest fetch, in server order.
///
/// Only whole-list replacement and single swap-removal change the order.
#[derive(Debug, Clone, Default)]
pub struct DropletCollection {
    droplets: Vec<Droplet>,
}

impl DropletCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list.
    pub fn replace(&mut self, droplets: Vec<Droplet>) {
        self.droplets = droplets;
    }

    pub fn clear(&mut self) {
        self.droplets.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Droplet> {
        self.droplets.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.droplets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.droplets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Droplet> {
        self.droplets.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Droplet] {
        &self.droplets
    }

    /// Index of the droplet with `id`.
    #[must_use]
    pub fn position(&self, id: u64) -> Option<usize> {
        self.droplets.iter().position(|d| d.id == id)
    }

    /// Remove the droplet at `index` by moving the last one into its slot.
    ///
    /// Out-of-range indexes leave the list untouched.
    pub fn swap_remove(&mut self, index: usize) -> Option<Droplet> {
        (index < self.droplets.len()).then(|| self.droplets.swap_remove(index))
    }
}

impl<'a> IntoIterator for &'a DropletCollection {
    type Item = &'a Droplet;
    type IntoIter = std::slice::Iter<'a, Droplet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
