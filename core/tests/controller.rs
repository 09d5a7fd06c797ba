use postgrid_core::{
    ImageController, ImageRef, ImageStore, LoadStatus, MemoryStore, Mutation, IMAGES_KEY,
};

fn refs(values: &[&str]) -> Vec<ImageRef> {
    values.iter().map(|value| ImageRef::from(*value)).collect()
}

fn controller_with(values: &[&str]) -> (ImageController<MemoryStore>, MemoryStore) {
    let raw = serde_json::to_string(values).expect("encode");
    let backend = MemoryStore::with_entry(IMAGES_KEY, &raw);
    let mut controller = ImageController::new(ImageStore::new(backend.clone()));
    assert_eq!(
        controller.load(),
        LoadStatus::Loaded {
            count: values.len()
        }
    );
    (controller, backend)
}

fn persisted(backend: &MemoryStore) -> Vec<ImageRef> {
    let raw = backend.raw(IMAGES_KEY).expect("persisted entry");
    serde_json::from_str(&raw).expect("decode")
}

#[test]
fn scenario_reorder_remove_clear_stays_in_sync() {
    let (mut controller, backend) = controller_with(&["a", "b", "c"]);

    assert_eq!(controller.reorder(0, 2), Mutation::Persisted);
    assert_eq!(controller.images(), refs(&["b", "c", "a"]).as_slice());
    assert_eq!(persisted(&backend), controller.images());

    assert_eq!(controller.remove(&ImageRef::from("c")), Mutation::Persisted);
    assert_eq!(controller.images(), refs(&["b", "a"]).as_slice());
    assert_eq!(persisted(&backend), controller.images());

    assert_eq!(controller.remove_all(), Mutation::Persisted);
    assert!(controller.images().is_empty());
    assert_eq!(backend.raw(IMAGES_KEY).as_deref(), Some("[]"));
    assert_eq!(backend.write_count(), 3);
}

#[test]
fn load_without_entry_starts_empty() {
    let backend = MemoryStore::new();
    let mut controller = ImageController::new(ImageStore::new(backend.clone()));
    assert_eq!(controller.load(), LoadStatus::Missing);
    assert_eq!(controller.posts(), 0);
    assert_eq!(backend.write_count(), 0);
}

#[test]
fn load_with_garbage_starts_empty() {
    let backend = MemoryStore::with_entry(IMAGES_KEY, "[[\"nested\"]]");
    let mut controller = ImageController::new(ImageStore::new(backend.clone()));
    assert_eq!(controller.load(), LoadStatus::Malformed);
    assert!(controller.images().is_empty());
    assert_eq!(backend.raw(IMAGES_KEY).as_deref(), Some("[[\"nested\"]]"));
}

#[test]
fn reorder_same_index_does_not_write() {
    let (mut controller, backend) = controller_with(&["a", "b", "c"]);
    assert_eq!(controller.reorder(2, 2), Mutation::Unchanged);
    assert_eq!(controller.images(), refs(&["a", "b", "c"]).as_slice());
    assert_eq!(backend.write_count(), 0);
}

#[test]
fn reorder_stale_index_does_not_write() {
    let (mut controller, backend) = controller_with(&["a", "b"]);
    assert_eq!(controller.reorder(5, 0), Mutation::Unchanged);
    assert_eq!(controller.reorder(0, 2), Mutation::Unchanged);
    assert_eq!(backend.write_count(), 0);
}

#[test]
fn append_empty_does_not_write() {
    let (mut controller, backend) = controller_with(&["a"]);
    assert_eq!(controller.append(Vec::new()), Mutation::Unchanged);
    assert_eq!(controller.images(), refs(&["a"]).as_slice());
    assert_eq!(backend.write_count(), 0);
}

#[test]
fn append_adds_to_end_and_persists() {
    let (mut controller, backend) = controller_with(&["a"]);
    assert_eq!(controller.append(refs(&["b", "c"])), Mutation::Persisted);
    assert_eq!(controller.images(), refs(&["a", "b", "c"]).as_slice());
    assert_eq!(persisted(&backend), controller.images());
    assert_eq!(controller.posts(), 3);
}

#[test]
fn remove_drops_every_duplicate() {
    let (mut controller, backend) = controller_with(&["x", "a", "x", "b", "x"]);
    let before = controller.posts();
    assert_eq!(controller.remove(&ImageRef::from("x")), Mutation::Persisted);
    assert_eq!(controller.posts(), before - 3);
    assert_eq!(controller.images(), refs(&["a", "b"]).as_slice());
    assert_eq!(persisted(&backend), controller.images());
}

#[test]
fn remove_unknown_does_not_write() {
    let (mut controller, backend) = controller_with(&["a", "b"]);
    assert_eq!(controller.remove(&ImageRef::from("z")), Mutation::Unchanged);
    assert_eq!(backend.write_count(), 0);
}

#[test]
fn remove_all_on_empty_still_clears_store() {
    let backend = MemoryStore::with_entry(IMAGES_KEY, "garbage");
    let mut controller = ImageController::new(ImageStore::new(backend.clone()));
    controller.load();
    assert_eq!(controller.remove_all(), Mutation::Persisted);
    assert_eq!(backend.raw(IMAGES_KEY).as_deref(), Some("[]"));
}

#[test]
fn failed_write_keeps_memory_state() {
    let (mut controller, backend) = controller_with(&["a", "b"]);
    backend.set_fail_writes(true);
    let outcome = controller.reorder(0, 1);
    assert!(matches!(outcome, Mutation::PersistFailed(_)));
    assert!(outcome.changed());
    assert_eq!(controller.images(), refs(&["b", "a"]).as_slice());
    assert_eq!(persisted(&backend), refs(&["a", "b"]));
}

#[test]
fn reload_sees_last_write() {
    let (mut controller, backend) = controller_with(&["a", "b", "c"]);
    controller.reorder(2, 0);
    controller.remove(&ImageRef::from("a"));

    let mut reloaded = ImageController::new(ImageStore::new(backend.clone()));
    reloaded.load();
    assert_eq!(reloaded.images(), refs(&["c", "b"]).as_slice());
}
