//! Tests for batch renaming

#[cfg(test)]
mod renamer_tests {
    use assetlint_validate::renamer::is_valid_file_name;
    use assetlint_validate::{
        AssetNameLinter, AssetRenamer, AssetStore, FileSystemAssetStore, FileSystemRenamer,
        RenameBatch, RenameOutcome, SkipReason,
    };
    use tempfile::TempDir;

    use crate::test_utils::{
        PREFAB_VARIANT_CONTENT, create_asset, create_file_at_path, prefab_variant, store_with, texture,
        texture_and_variant_repository,
    };

    #[test]
    fn test_file_name_validation() {
        assert!(is_valid_file_name("T_player"));
        assert!(is_valid_file_name("Main Menu (1)"));
        assert!(!is_valid_file_name("a/b"));
        assert!(!is_valid_file_name("what?"));
        assert!(!is_valid_file_name("tab\there"));
    }

    #[test]
    fn test_operations_start_with_current_name() {
        let store = store_with([texture("Assets/Art/player.png")]);
        let repository = texture_and_variant_repository();
        let batch = RenameBatch::from_paths(&store, &repository, ["Assets/Art/player.png"]);

        let operation = &batch.operations()[0];
        assert_eq!(operation.current_name, "player");
        assert_eq!(operation.new_name, "player");
        assert_eq!(operation.suggested_name, "T_player");
        assert!(operation.selected);
    }

    #[test]
    fn test_execute_renames_to_suggested_names() {
        let mut store = store_with([
            texture("Assets/Art/player.png"),
            prefab_variant("Assets/Prefabs/Boss.prefab"),
        ]);
        let repository = texture_and_variant_repository();
        let mut batch = RenameBatch::from_paths(
            &store,
            &repository,
            ["Assets/Art/player.png", "Assets/Prefabs/Boss.prefab"],
        );
        batch.set_names_to_suggested();

        let summary = batch.execute(&mut store, None);

        assert_eq!((summary.renamed, summary.skipped, summary.failed), (2, 0, 0));
        assert_eq!(
            store.list_all_asset_paths().unwrap(),
            vec!["Assets/Art/T_player.png", "Assets/Prefabs/Boss_Variant.prefab"]
        );
        assert!(store.is_variant("Assets/Prefabs/Boss_Variant.prefab"));
        assert_eq!(
            summary.to_string(),
            "Renamed 2 asset(s), skipped 0 asset(s), and failed to rename 0 asset(s)."
        );
    }

    #[test]
    fn test_unsafe_and_invalid_renames_are_skipped() {
        let mut store = store_with([
            texture("Assets/Art/a.png"),
            texture("Assets/Art/b.png"),
            texture("Assets/Art/c.png"),
            texture("Assets/Art/Level1.png"),
            texture("Assets/Art/d.png"),
            texture("Assets/Art/T_e.png"),
        ]);
        let repository = texture_and_variant_repository();
        let mut batch = RenameBatch::from_paths(
            &store,
            &repository,
            [
                "Assets/Art/a.png",
                "Assets/Art/b.png",
                "Assets/Art/c.png",
                "Assets/Art/Level1.png",
                "Assets/Art/d.png",
                "Assets/Art/T_e.png",
            ],
        );
        batch.set_names_to_suggested();
        let operations = batch.operations_mut();
        operations[0].new_name = String::new();
        operations[1].new_name = "b:c".to_string();
        operations[2].selected = false;
        operations[4].new_name = "T_e".to_string();

        let summary = batch.execute(&mut store, Some("Level1"));

        assert_eq!((summary.renamed, summary.skipped, summary.failed), (0, 5, 1));
        let outcomes: Vec<&RenameOutcome> = summary.outcomes.iter().map(|(_, o)| o).collect();
        assert_eq!(outcomes[0], &RenameOutcome::Skipped(SkipReason::EmptyName));
        assert_eq!(outcomes[1], &RenameOutcome::Skipped(SkipReason::InvalidCharacters));
        assert_eq!(outcomes[2], &RenameOutcome::Skipped(SkipReason::NotSelected));
        assert_eq!(outcomes[3], &RenameOutcome::Skipped(SkipReason::ActiveDocument));
        // `d` -> `T_e` collides with an existing asset.
        assert!(matches!(outcomes[4], RenameOutcome::Failed(_)));
        assert_eq!(outcomes[5], &RenameOutcome::Skipped(SkipReason::Unchanged));
        assert!(store.get("Assets/Art/d.png").is_some());
    }

    #[test]
    fn test_pages_of_twenty_three() {
        let paths: Vec<String> = (0..50).map(|i| format!("Assets/Art/tex{i:02}.png")).collect();
        let store = store_with(paths.iter().map(|p| texture(p)));
        let repository = texture_and_variant_repository();
        let batch = RenameBatch::from_paths(&store, &repository, &paths);

        assert_eq!(RenameBatch::PAGE_LENGTH, 23);
        assert_eq!(batch.page_count(), 3);
        assert_eq!(batch.page(0).len(), 23);
        assert_eq!(batch.page(1)[0].path, "Assets/Art/tex23.png");
        assert_eq!(batch.page(2).len(), 4);
        assert!(batch.page(3).is_empty());

        let empty = RenameBatch::default();
        assert_eq!(empty.page_count(), 1);
        assert!(empty.page(0).is_empty());
    }

    #[test]
    fn test_file_system_renamer_moves_meta() {
        let temp = TempDir::new().unwrap();
        create_asset(&temp, "Assets/Prefabs/Boss.prefab", PREFAB_VARIANT_CONTENT, "5555");

        let mut renamer = FileSystemRenamer::new(temp.path());
        let new_path = renamer.rename("Assets/Prefabs/Boss.prefab", "Boss_Variant").unwrap();

        assert_eq!(new_path, "Assets/Prefabs/Boss_Variant.prefab");
        assert!(temp.path().join("Assets/Prefabs/Boss_Variant.prefab").is_file());
        assert!(temp.path().join("Assets/Prefabs/Boss_Variant.prefab.meta").is_file());
        assert!(!temp.path().join("Assets/Prefabs/Boss.prefab").exists());

        let store = FileSystemAssetStore::new(temp.path());
        assert_eq!(store.identity("Assets/Prefabs/Boss_Variant.prefab").as_deref(), Some("5555"));
    }

    #[test]
    fn test_file_system_renamer_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        create_asset(&temp, "Assets/Art/player.png", "a", "1");
        create_asset(&temp, "Assets/Art/T_player.png", "b", "2");

        let mut renamer = FileSystemRenamer::new(temp.path());
        assert!(renamer.rename("Assets/Art/player.png", "T_player").is_err());
        assert!(renamer.rename("Assets/Art/missing.png", "T_missing").is_err());
        assert_eq!(
            std::fs::read_to_string(temp.path().join("Assets/Art/T_player.png")).unwrap(),
            "b"
        );
    }

    #[test]
    fn test_file_system_renamer_leaves_asset_when_meta_target_taken() {
        let temp = TempDir::new().unwrap();
        create_asset(&temp, "Assets/Art/player.png", "png", "1");
        create_file_at_path(&temp, "Assets/Art/T_player.png.meta/sub", "stale");

        let mut renamer = FileSystemRenamer::new(temp.path());
        let err = renamer.rename("Assets/Art/player.png", "T_player").unwrap_err();

        assert!(err.to_string().contains("T_player.png.meta"));
        assert!(temp.path().join("Assets/Art/player.png").is_file());
        assert!(temp.path().join("Assets/Art/player.png.meta").is_file());
        assert!(!temp.path().join("Assets/Art/T_player.png").exists());

        let store = FileSystemAssetStore::new(temp.path());
        assert_eq!(store.identity("Assets/Art/player.png").as_deref(), Some("1"));
    }

    #[test]
    fn test_project_rename_end_to_end() {
        let temp = TempDir::new().unwrap();
        create_asset(&temp, "Assets/Art/player.png", "png", "1");
        create_asset(&temp, "Assets/Prefabs/Boss.prefab", PREFAB_VARIANT_CONTENT, "2");
        let store = FileSystemAssetStore::new(temp.path());
        let repository = texture_and_variant_repository();
        let linter = AssetNameLinter::new(&store, &repository);

        let paths = linter.violating_asset_paths().unwrap();
        let mut batch = RenameBatch::from_paths(&store, &repository, &paths);
        batch.set_names_to_suggested();
        let summary = batch.execute(&mut FileSystemRenamer::new(temp.path()), None);

        assert_eq!(summary.renamed, 2);
        assert!(linter.violating_asset_paths().unwrap().is_empty());
    }
}
