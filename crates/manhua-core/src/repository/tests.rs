//! Repository Integration Tests
//!
//! Tests for ManhuaRepository against the in-memory store.

#[cfg(test)]
mod tests {
    use crate::config::{ShelfConfig, DEFAULT_STORAGE_KEY};
    use crate::domain::{DomainError, ManhuaItem, STATUS_IMPORTED};
    use crate::repository::{CollectionRepository, ManhuaRepository, MemoryStore};

    fn fallback() -> Vec<ManhuaItem> {
        vec![ManhuaItem::new("seed-1", "Moonlit Contract", 120, 89)]
    }

    fn repo_with(raw: &str) -> ManhuaRepository<MemoryStore> {
        ManhuaRepository::new(MemoryStore::with_value(DEFAULT_STORAGE_KEY, raw), &ShelfConfig::default())
    }

    #[test]
    fn test_empty_storage_seeds_fallback() {
        let mut repo = ManhuaRepository::new(MemoryStore::new(), &ShelfConfig::default());

        let loaded = repo.load(fallback());
        assert_eq!(loaded, fallback());

        let raw = repo.store().unwrap().raw(DEFAULT_STORAGE_KEY).unwrap();
        let stored: Vec<ManhuaItem> = serde_json::from_str(raw).unwrap();
        assert_eq!(stored, fallback());
    }

    #[test]
    fn test_corrupt_storage_seeds_fallback() {
        for raw in ["{not json", r#"{"id": "1"}"#, "42"] {
            let mut repo = repo_with(raw);
            assert_eq!(repo.load(fallback()), fallback());
            let stored = repo.store().unwrap().raw(DEFAULT_STORAGE_KEY).unwrap();
            assert_ne!(stored, raw);
        }
    }

    #[test]
    fn test_all_invalid_keeps_storage_untouched() {
        let raw = r#"[{"name": "no id"}, 3, null]"#;
        let mut repo = repo_with(raw);

        assert_eq!(repo.load(fallback()), fallback());
        assert_eq!(repo.store().unwrap().raw(DEFAULT_STORAGE_KEY), Some(raw));
        assert_eq!(repo.store().unwrap().writes(), 0);
    }

    #[test]
    fn test_partial_invalid_is_sanitized_and_rewritten() {
        let raw = r#"[
            {"id": "a", "name": "Lotus Noir", "status": "Manual", "totalChapters": 80, "currentChapter": 52, "favorite": true},
            {"id": "b", "name": "Broken", "status": "Manual", "totalChapters": "??", "currentChapter": 1}
        ]"#;
        let mut repo = repo_with(raw);

        let loaded = repo.load(fallback());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Lotus Noir");
        assert!(loaded[0].favorite);

        let stored: Vec<ManhuaItem> =
            serde_json::from_str(repo.store().unwrap().raw(DEFAULT_STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(stored, loaded);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let items = vec![
            ManhuaItem::new("a", "Azure Blade", 40, 17).with_favorite(true),
            ManhuaItem::new("b", "City of Jade", 260, 204)
                .with_status(STATUS_IMPORTED)
                .with_description("Cultivo e intriga na capital."),
        ];
        let mut repo = ManhuaRepository::new(MemoryStore::new(), &ShelfConfig::default());
        repo.save(&items).expect("save failed");

        assert_eq!(repo.load(fallback()), items);
    }

    #[test]
    fn test_save_overwrites_whole_collection() {
        let mut repo = ManhuaRepository::new(MemoryStore::new(), &ShelfConfig::default());
        repo.save(&fallback()).unwrap();
        repo.save(&[]).unwrap();

        assert_eq!(repo.store().unwrap().raw(DEFAULT_STORAGE_KEY), Some("[]"));
    }

    #[test]
    fn test_save_reports_write_failure() {
        let mut repo = ManhuaRepository::new(MemoryStore::rejecting_writes(), &ShelfConfig::default());
        assert!(matches!(repo.save(&fallback()), Err(DomainError::Storage(_))));
        // load still hands back the fallback
        assert_eq!(repo.load(fallback()), fallback());
    }

    #[test]
    fn test_detached_repository_passes_through() {
        let mut repo = ManhuaRepository::<MemoryStore>::detached(&ShelfConfig::default());
        assert!(!repo.is_persistent());
        assert_eq!(repo.load(fallback()), fallback());
        assert!(repo.save(&fallback()).is_ok());
    }

    #[test]
    fn test_custom_storage_key() {
        let config = ShelfConfig { storage_key: "other.key".into(), ..ShelfConfig::default() };
        let mut repo = ManhuaRepository::new(MemoryStore::new(), &config);
        repo.save(&fallback()).unwrap();

        let store = repo.store().unwrap();
        assert!(store.raw("other.key").is_some());
        assert!(store.raw(DEFAULT_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_duplicate_ids_and_names_keep_first() {
        let raw = r#"[
            {"id": "a", "name": "Lotus Noir", "status": "Manual", "totalChapters": 80, "currentChapter": 52},
            {"id": "a", "name": "Azure Blade", "status": "Manual", "totalChapters": 40, "currentChapter": 17},
            {"id": "b", "name": " lotus noir", "status": "Manual", "totalChapters": 10, "currentChapter": 1},
            {"id": "c", "name": "City of Jade", "status": "Manual", "totalChapters": 260, "currentChapter": 204}
        ]"#;
        let mut repo = repo_with(raw);

        let loaded = repo.load(fallback());
        let kept: Vec<(&str, &str)> = loaded.iter().map(|i| (i.id.as_str(), i.name.as_str())).collect();
        assert_eq!(kept, vec![("a", "Lotus Noir"), ("c", "City of Jade")]);

        let raw = repo.store().unwrap().raw(DEFAULT_STORAGE_KEY).unwrap();
        let stored: Vec<ManhuaItem> = serde_json::from_str(raw).unwrap();
        assert_eq!(stored, loaded);
    }

    #[test]
    fn test_delete_after_duplicate_load_leaves_no_copy() {
        let raw = r#"[
            {"id": "a", "name": "Lotus Noir", "status": "Manual", "totalChapters": 80, "currentChapter": 52},
            {"id": "a", "name": " lotus noir", "status": "Manual", "totalChapters": 80, "currentChapter": 10}
        ]"#;
        let mut shelf = crate::library::Shelf::open(repo_with(raw), fallback());
        assert_eq!(shelf.items().len(), 1);

        shelf.delete("a").unwrap();
        assert!(shelf.items().is_empty());
        assert!(shelf.get("a").is_none());
    }
}
