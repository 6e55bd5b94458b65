use llrb_tree::LlrbMap;

#[test]
fn llrb_map_smoke_matrix() {
    let mut map = LlrbMap::<i32, &str>::new();
    assert!(map.is_empty());
    assert_eq!(map.min(), None);
    assert_eq!(map.max(), None);

    map.insert(3, "c");
    map.insert(1, "a");
    map.insert(4, "d");
    assert_eq!(map.insert(3, "C"), Some("c"));
    map.insert(44, "x");

    assert_eq!(map.get(&3), Some(&"C"));
    assert_eq!(map.get(&2), None);
    assert!(map.contains_key(&44));
    assert_eq!(map.len(), 4);
    assert_eq!(map.min(), Some((&1, &"a")));
    assert_eq!(map.max(), Some((&44, &"x")));
    map.check().unwrap();
}

#[test]
fn llrb_map_get_mut_matrix() {
    let mut map = LlrbMap::new();
    for i in 0..10 {
        map.insert(i, i * 10);
    }
    *map.get_mut(&5).unwrap() += 1;
    assert_eq!(map.get(&5), Some(&51));
    assert_eq!(map.get_mut(&99), None);
}

#[test]
fn llrb_map_ladder_insert_delete_matrix() {
    let mut map = LlrbMap::<i32, i32>::new();

    for i in 0..200 {
        map.insert(i, i);
        assert_eq!(map.get(&i), Some(&i));
        map.check().unwrap();
    }
    assert_eq!(map.len(), 200);

    for i in (0..200).step_by(2) {
        assert_eq!(map.remove(&i), Some(i));
        map.check().unwrap();
    }
    assert_eq!(map.len(), 100);

    for i in 0..200 {
        if i % 2 == 0 {
            assert_eq!(map.get(&i), None);
        } else {
            assert_eq!(map.get(&i), Some(&i));
        }
    }
}

#[test]
fn llrb_map_pop_min_max_matrix() {
    let mut map = LlrbMap::new();
    for (i, name) in ["zero", "one", "two", "three"].into_iter().enumerate() {
        map.insert(i, name);
    }
    assert_eq!(map.pop_min(), Some((0, "zero")));
    assert_eq!(map.pop_max(), Some((3, "three")));
    assert_eq!(map.pop_max(), Some((2, "two")));
    assert_eq!(map.pop_min(), Some((1, "one")));
    assert_eq!(map.pop_min(), None);
    assert_eq!(map.pop_max(), None);
    assert!(map.is_empty());
    map.check().unwrap();
}

#[test]
fn llrb_map_remove_entry_returns_key_matrix() {
    let mut map = LlrbMap::new();
    map.insert("k".to_string(), 1);
    assert_eq!(map.remove_entry(&"k".to_string()), Some(("k".to_string(), 1)));
    assert_eq!(map.remove_entry(&"k".to_string()), None);
}

#[test]
fn llrb_map_debug_print_matrix() {
    let mut map = LlrbMap::new();
    map.insert(2, 'b');
    map.insert(1, 'a');
    map.insert(3, 'c');
    assert_eq!(
        format!("{map:?}"),
        "Node[0] black { 2 = 'b' }\nL=Node[1] black { 1 = 'a' }\n  L=∅\n  R=∅\nR=Node[2] black { 3 = 'c' }\n  L=∅\n  R=∅"
    );
}
