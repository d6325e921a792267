//! Tests for the to-do store

#[cfg(test)]
mod tests {
    use super::super::store::TodoStore;

    #[test]
    fn test_create_appends_item() {
        let mut store = TodoStore::new();

        let id = store.create("buy milk").map(|item| item.id);

        assert!(id.is_some());
        assert_eq!(store.len(), 1);
        let item = &store.items()[0];
        assert_eq!(item.text, "buy milk");
        assert!(!item.is_complete);
    }

    #[test]
    fn test_create_trims_text() {
        let mut store = TodoStore::new();

        let item = store.create("  walk dog  ").unwrap();

        assert_eq!(item.text, "walk dog");
    }

    #[test]
    fn test_create_empty_is_noop() {
        let mut store = TodoStore::new();

        assert!(store.create("").is_none());
        assert!(store.create("   ").is_none());
        assert!(store.create("\t\n").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_preserves_insertion_order() {
        let mut store = TodoStore::new();

        store.create("first");
        store.create("second");
        store.create("third");

        let texts: Vec<_> = store.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = TodoStore::new();

        for n in 0..50 {
            store.create(&format!("item {}", n));
        }

        let mut ids: Vec<_> = store.items().iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_position_within_bounds() {
        let mut store = TodoStore::new();

        for n in 0..50 {
            store.create(&format!("item {}", n));
        }

        for item in store.items() {
            let [x, y, z] = item.position;
            assert!(x >= -2.5 && x <= 2.5, "x out of bounds: {}", x);
            assert!(y >= -2.5 && y <= 2.5, "y out of bounds: {}", y);
            assert!(z >= -2.0 && z <= 2.0, "z out of bounds: {}", z);
        }
    }

    #[test]
    fn test_toggle_flips_completion() {
        let mut store = TodoStore::new();
        let id = store.create("buy milk").unwrap().id;

        assert!(store.toggle(id));
        assert!(store.items()[0].is_complete);
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let mut store = TodoStore::new();
        let id = store.create("buy milk").unwrap().id;

        store.toggle(id);
        store.toggle(id);

        assert!(!store.items()[0].is_complete);
    }

    #[test]
    fn test_toggle_leaves_other_items_alone() {
        let mut store = TodoStore::new();
        let a = store.create("one").unwrap().id;
        store.create("two");
        store.create("three");

        store.toggle(a);

        assert!(store.items()[0].is_complete);
        assert!(!store.items()[1].is_complete);
        assert!(!store.items()[2].is_complete);
    }

    #[test]
    fn test_toggle_preserves_text_and_position() {
        let mut store = TodoStore::new();
        let id = store.create("buy milk").unwrap().id;
        let position = store.items()[0].position;

        store.toggle(id);

        assert_eq!(store.items()[0].text, "buy milk");
        assert_eq!(store.items()[0].position, position);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = TodoStore::new();
        store.create("buy milk");

        assert!(!store.toggle(uuid::Uuid::new_v4()));
        assert_eq!(store.len(), 1);
        assert!(!store.items()[0].is_complete);
    }

    #[test]
    fn test_completed_count() {
        let mut store = TodoStore::new();
        let a = store.create("one").unwrap().id;
        let b = store.create("two").unwrap().id;
        store.create("three");

        store.toggle(a);
        store.toggle(b);

        assert_eq!(store.completed(), 2);
        assert_eq!(store.len(), 3);
    }
}
