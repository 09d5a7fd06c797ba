use crate::store::{ImageStore, KeyValueStore, ReadOutcome, StoreError};
use crate::{ImageCollection, ImageRef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { count: usize },
    Missing,
    Malformed,
    Unavailable(StoreError),
}

/// Result of a mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Nothing changed and nothing was written.
    Unchanged,
    Persisted,
    /// The in-memory list changed but the backend refused the write.
    PersistFailed(StoreError),
}

impl Mutation {
    pub fn changed(&self) -> bool {
        !matches!(self, Mutation::Unchanged)
    }
}

/// Owns the image collection and writes the full list through to the store
/// after every change.
pub struct ImageController<S> {
    collection: ImageCollection,
    store: ImageStore<S>,
}

impl<S: KeyValueStore> ImageController<S> {
    pub fn new(store: ImageStore<S>) -> Self {
        Self {
            collection: ImageCollection::new(),
            store,
        }
    }

    pub fn collection(&self) -> &ImageCollection {
        &self.collection
    }

    pub fn images(&self) -> &[ImageRef] {
        self.collection.as_slice()
    }

    pub fn posts(&self) -> usize {
        self.collection.len()
    }

    /// Replaces the in-memory list with the stored one. Missing or broken
    /// data leaves an empty collection.
    pub fn load(&mut self) -> LoadStatus {
        let (refs, status) = match self.store.read() {
            ReadOutcome::Loaded(refs) => {
                let count = refs.len();
                (refs, LoadStatus::Loaded { count })
            }
            ReadOutcome::Missing => (Vec::new(), LoadStatus::Missing),
            ReadOutcome::Malformed => (Vec::new(), LoadStatus::Malformed),
            ReadOutcome::Unavailable(err) => (Vec::new(), LoadStatus::Unavailable(err)),
        };
        self.collection = ImageCollection::from_refs(refs);
        status
    }

    pub fn append(&mut self, new_refs: Vec<ImageRef>) -> Mutation {
        if !self.collection.append(new_refs) {
            return Mutation::Unchanged;
        }
        self.persist()
    }

    /// Removes every occurrence of `image`.
    pub fn remove(&mut self, image: &ImageRef) -> Mutation {
        if self.collection.remove_all_of(image) == 0 {
            return Mutation::Unchanged;
        }
        self.persist()
    }

    /// Always writes, even when the list was already empty.
    pub fn remove_all(&mut self) -> Mutation {
        self.collection.clear();
        self.persist()
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> Mutation {
        if !self.collection.reorder(from, to) {
            return Mutation::Unchanged;
        }
        self.persist()
    }

    fn persist(&self) -> Mutation {
        match self.store.write_all(self.collection.as_slice()) {
            Ok(()) => Mutation::Persisted,
            Err(err) => Mutation::PersistFailed(err),
        }
    }
}
