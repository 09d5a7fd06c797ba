use crate::ImageRef;

/// Ordered list of image references; index order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageCollection {
    refs: Vec<ImageRef>,
}

impl ImageCollection {
    pub fn new() -> Self {
        Self { refs: Vec::new() }
    }

    pub fn from_refs(refs: Vec<ImageRef>) -> Self {
        Self { refs }
    }

    pub fn as_slice(&self) -> &[ImageRef] {
        &self.refs
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.refs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRef> {
        self.refs.iter()
    }

    /// Appends in the given order. Returns `false` when nothing was added.
    pub fn append<I>(&mut self, new_refs: I) -> bool
    where
        I: IntoIterator<Item = ImageRef>,
    {
        let before = self.refs.len();
        self.refs.extend(new_refs);
        self.refs.len() != before
    }

    /// Drops every element equal to `target` and returns how many went.
    pub fn remove_all_of(&mut self, target: &ImageRef) -> usize {
        let before = self.refs.len();
        self.refs.retain(|image| image != target);
        before - self.refs.len()
    }

    /// Empties the list, returning whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_items = !self.refs.is_empty();
        self.refs.clear();
        had_items
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        reorder_in_place(&mut self.refs, from, to)
    }
}

impl<'a> IntoIterator for &'a ImageCollection {
    type Item = &'a ImageRef;
    type IntoIter = std::slice::Iter<'a, ImageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.refs.iter()
    }
}

/// Splice move: takes the element at `from` out and reinserts it at `to` in
/// the shortened list. Out-of-range indices and `from == to` leave `items`
/// untouched and return `false`.
pub fn reorder_in_place<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    let len = items.len();
    if from == to || from >= len || to >= len {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}
