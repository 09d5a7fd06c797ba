use postgrid_core::{reorder_in_place, ImageCollection, ImageRef};

fn refs(values: &[&str]) -> Vec<ImageRef> {
    values.iter().map(|value| ImageRef::from(*value)).collect()
}

#[test]
fn reorder_moves_forward_with_splice_semantics() {
    let mut collection = ImageCollection::from_refs(refs(&["a", "b", "c"]));
    assert!(collection.reorder(0, 2));
    assert_eq!(collection.as_slice(), refs(&["b", "c", "a"]).as_slice());
}

#[test]
fn reorder_moves_backward() {
    let mut collection = ImageCollection::from_refs(refs(&["a", "b", "c", "d"]));
    assert!(collection.reorder(3, 1));
    assert_eq!(collection.as_slice(), refs(&["a", "d", "b", "c"]).as_slice());
}

#[test]
fn reorder_round_trip_restores_every_pair() {
    let original = refs(&["a", "b", "c", "d", "e"]);
    for from in 0..original.len() {
        for to in 0..original.len() {
            if from == to {
                continue;
            }
            let mut items = original.clone();
            assert!(reorder_in_place(&mut items, from, to));
            assert!(reorder_in_place(&mut items, to, from));
            assert_eq!(items, original, "round trip {from} -> {to}");
        }
    }
}

#[test]
fn reorder_same_index_is_noop() {
    let mut collection = ImageCollection::from_refs(refs(&["a", "b", "c"]));
    assert!(!collection.reorder(1, 1));
    assert_eq!(collection.as_slice(), refs(&["a", "b", "c"]).as_slice());
}

#[test]
fn reorder_out_of_bounds_is_noop() {
    let mut items = refs(&["a", "b", "c"]);
    assert!(!reorder_in_place(&mut items, 3, 0));
    assert!(!reorder_in_place(&mut items, 0, 3));
    assert!(!reorder_in_place(&mut items, usize::MAX, 1));
    assert_eq!(items, refs(&["a", "b", "c"]));

    let mut empty: Vec<ImageRef> = Vec::new();
    assert!(!reorder_in_place(&mut empty, 0, 0));
    assert!(!reorder_in_place(&mut empty, 0, 1));
}

#[test]
fn reorder_keeps_duplicates_in_place() {
    let mut collection = ImageCollection::from_refs(refs(&["x", "y", "x", "z"]));
    assert!(collection.reorder(2, 0));
    assert_eq!(collection.as_slice(), refs(&["x", "x", "y", "z"]).as_slice());
    assert_eq!(collection.len(), 4);
}

#[test]
fn remove_all_of_drops_every_match_and_keeps_order() {
    let mut collection = ImageCollection::from_refs(refs(&["a", "x", "b", "x", "c", "x"]));
    let removed = collection.remove_all_of(&ImageRef::from("x"));
    assert_eq!(removed, 3);
    assert_eq!(collection.as_slice(), refs(&["a", "b", "c"]).as_slice());
    assert!(collection.iter().all(|image| image.as_str() != "x"));
}

#[test]
fn remove_all_of_missing_value_removes_nothing() {
    let mut collection = ImageCollection::from_refs(refs(&["a", "b"]));
    assert_eq!(collection.remove_all_of(&ImageRef::from("z")), 0);
    assert_eq!(collection.len(), 2);
}

#[test]
fn append_preserves_incoming_order() {
    let mut collection = ImageCollection::from_refs(refs(&["a"]));
    assert!(collection.append(refs(&["c", "b"])));
    assert_eq!(collection.as_slice(), refs(&["a", "c", "b"]).as_slice());
    assert!(!collection.append(Vec::new()));
}
