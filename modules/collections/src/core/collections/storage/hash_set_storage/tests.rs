use super::HashSetStorage;

#[test]
fn insert_reports_new_elements_only() {
  let mut storage = HashSetStorage::new();
  assert!(storage.insert(3));
  assert!(storage.insert(4));
  assert!(!storage.insert(3));
  assert_eq!(storage.len(), 2);
  assert!(storage.contains(&4));
  assert!(!storage.contains(&5));
}

#[test]
fn snapshot_holds_each_element_once() {
  let mut storage = HashSetStorage::new();
  for value in [1, 2, 2, 3, 1] {
    storage.insert(value);
  }
  let mut snapshot = storage.snapshot();
  snapshot.sort_unstable();
  assert_eq!(snapshot, [1, 2, 3]);
}

#[test]
fn clear_empties_storage() {
  let mut storage = HashSetStorage::new();
  storage.insert("k");
  storage.clear();
  assert!(storage.is_empty());
  assert!(!storage.contains(&"k"));
}
