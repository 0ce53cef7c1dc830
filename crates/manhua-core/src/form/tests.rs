//! Form Property Tests
//!
//! Random batches against random shelves: whatever gets through validation
//! must keep the shelf invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::config::ShelfConfig;
use crate::domain::{ManhuaItem, SequentialIds};
use crate::form::{clamp_count, RowField, ShelfForm};
use crate::library::Shelf;
use crate::repository::{ManhuaRepository, MemoryStore};

fn name_strategy() -> impl Strategy<Value = String> {
    // small pool so collisions actually happen
    prop::sample::select(vec!["Lotus Noir", "lotus noir ", "Azure Blade", " AZURE blade", "City of Jade", "Moonlit Contract", "", "  "])
        .prop_map(str::to_string)
}

fn number_input() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..500).prop_map(|n| n.to_string()),
        Just(String::new()),
        Just("-3".to_string()),
        Just("abc".to_string()),
        Just("7.5".to_string()),
    ]
}

fn row_strategy() -> impl Strategy<Value = (String, String, String)> {
    (name_strategy(), number_input(), number_input())
}

fn shelf() -> Shelf<MemoryStore> {
    let existing = vec![
        ManhuaItem::new("a", "Moonlit Contract", 120, 89),
        ManhuaItem::new("b", "Lotus Noir", 80, 52),
    ];
    let config = ShelfConfig::default();
    Shelf::open(ManhuaRepository::new(MemoryStore::new(), &config), existing)
}

fn assert_invariants(items: &[ManhuaItem]) {
    let mut names = HashSet::new();
    for item in items {
        assert!(item.total_chapters > 0);
        assert!(item.current_chapter <= item.total_chapters);
        assert!(names.insert(item.name_key()), "duplicate name {}", item.name);
    }
}

proptest! {
    #[test]
    fn create_keeps_invariants(rows in prop::collection::vec(row_strategy(), 1..6)) {
        let mut shelf = shelf();
        let mut form = ShelfForm::new(&ShelfConfig::default());
        form.open_create();
        form.set_count_input(rows.len().to_string());
        form.confirm_count();
        for (i, (name, total, current)) in rows.iter().enumerate() {
            form.update_row(i, RowField::Name, name.clone());
            form.update_row(i, RowField::TotalChapters, total.clone());
            form.update_row(i, RowField::CurrentChapter, current.clone());
        }

        let before = shelf.items().to_vec();
        match form.submit(shelf.items(), &mut SequentialIds::new("p")) {
            Ok(outcome) => {
                shelf.apply_form(&outcome).unwrap();
                prop_assert_eq!(shelf.items().len(), before.len() + rows.len());
                prop_assert!(!form.is_open());
            }
            Err(_) => {
                prop_assert_eq!(shelf.items(), before.as_slice());
                prop_assert!(form.is_open());
            }
        }
        assert_invariants(shelf.items());
    }

    #[test]
    fn edit_keeps_invariants(total in number_input(), current in number_input(), name in name_strategy()) {
        let mut shelf = shelf();
        let mut form = ShelfForm::new(&ShelfConfig::default());
        form.open_edit(shelf.items());
        form.update_row(0, RowField::Name, name);
        form.update_row(0, RowField::TotalChapters, total);
        form.update_row(0, RowField::CurrentChapter, current);

        if let Ok(outcome) = form.submit(shelf.items(), &mut SequentialIds::new("p")) {
            shelf.apply_form(&outcome).unwrap();
        }
        prop_assert_eq!(shelf.items().len(), 2);
        assert_invariants(shelf.items());
    }

    #[test]
    fn count_is_always_in_range(raw in ".{0,8}") {
        let count = clamp_count(&raw, 12);
        prop_assert!((1..=12).contains(&count));
    }
}
