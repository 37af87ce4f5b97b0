//! Tests for rule repositories

#[cfg(test)]
mod settings_tests {
    use assetlint_validate::settings::DEFAULT_REPOSITORY_PATH;
    use assetlint_validate::{
        RepositoryFile, RuleContext, RuleRepository, RuleSpec, ValidationError,
        active_repository, discover_repositories, is_compliant, suggest,
    };
    use tempfile::TempDir;

    use crate::test_utils::{create_file_at_path, texture};

    const REPOSITORY_YAML: &str = r#"
name: textures
warn_on_incorrect: false
rules:
  - kind: type_prefix
    type_name: Texture2D
    prefix: T
  - kind: variant_suffix
ignored_paths:
  - Assets/Plugins
"#;

    #[test]
    fn test_repository_from_yaml() {
        let repository = RuleRepository::from_yaml(REPOSITORY_YAML).unwrap();

        assert_eq!(repository.name.as_deref(), Some("textures"));
        assert!(repository.enabled);
        assert!(!repository.warn_on_incorrect);
        assert!(repository.ignore_script_assets);
        assert_eq!(repository.rule_count(), 2);
        assert_eq!(repository.ignored_paths, vec!["Assets/Plugins".to_string()]);
        assert!(repository.config_errors().is_empty());
        assert_eq!(suggest(&texture("Assets/Art/player.png"), &repository), "T_player");
    }

    #[test]
    fn test_unknown_rule_kind_keeps_other_rules() {
        let yaml = r#"
rules:
  - kind: camel_case
  - kind: type_prefix
    type_name: Texture2D
  - kind: type_prefix
    type_name: Texture2D
    prefix: T
"#;
        let repository = RuleRepository::from_yaml(yaml).unwrap();

        assert_eq!(repository.rule_count(), 3);
        assert_eq!(repository.config_errors().len(), 2);
        assert_eq!(repository.specs()[0].kind(), "unrecognized");
        assert_eq!(repository.specs()[1].kind(), "unrecognized");
        assert!(!is_compliant(&texture("Assets/Art/player.png"), &repository));
        assert_eq!(suggest(&texture("Assets/Art/player.png"), &repository), "T_player");
    }

    #[test]
    fn test_unrecognized_rule_is_saved_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Assets/Editor/naming.assetlint.yml");
        create_file_at_path(
            &temp,
            "Assets/Editor/naming.assetlint.yml",
            "rules:
  - kind: camel_case
    strict: true
  - kind: variant_suffix
",
        );

        let mut repository = RuleRepository::load(&path).unwrap();
        repository.ignore_path("Assets/Plugins");
        repository.save(&path).unwrap();

        let reloaded = RuleRepository::load(&path).unwrap();
        assert_eq!(reloaded.specs(), repository.specs());
        assert_eq!(reloaded.config_errors().len(), 1);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("camel_case"));
        assert!(content.contains("strict: true"));
    }

    #[test]
    fn test_misconfigured_rule_degrades_to_no_match() {
        let yaml = r#"
rules:
  - kind: regex_derived
    pattern: "[A-Z"
"#;
        let repository = RuleRepository::from_yaml(yaml).unwrap();

        assert_eq!(repository.rule_count(), 1);
        assert_eq!(repository.config_errors().len(), 1);
        assert!(is_compliant(&texture("Assets/Art/player.png"), &repository));
    }

    #[test]
    fn test_default_repository_file() {
        let file = RepositoryFile::default();

        assert!(file.enabled);
        assert!(file.warn_on_incorrect);
        assert!(file.ignore_script_assets);
        assert_eq!(file.rules, RuleSpec::defaults());
    }

    #[test]
    fn test_save_and_load_keep_specs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Assets/Editor/naming.assetlint.yml");

        let repository = RuleRepository::new()
            .with_spec(RuleSpec::TypePrefix {
                type_name: "Material".to_string(),
                prefix: "M".to_string(),
                priority: 2,
            })
            .with_ignored_asset("0a1b2c");
        repository.save(&path).unwrap();

        let loaded = RuleRepository::load(&path).unwrap();
        assert_eq!(loaded.specs(), repository.specs());
        assert_eq!(loaded.ignored_assets, vec!["0a1b2c".to_string()]);
        assert_eq!(loaded.source(), Some(path.as_path()));
    }

    #[test]
    fn test_load_reports_file_on_parse_error() {
        let temp = TempDir::new().unwrap();
        create_file_at_path(&temp, "broken.assetlint.yml", "rules: [\n");

        let err = RuleRepository::load(temp.path().join("broken.assetlint.yml")).unwrap_err();
        assert!(matches!(err, ValidationError::Parse { .. }));
        assert!(err.to_string().contains("broken.assetlint.yml"));
    }

    #[test]
    fn test_load_or_create_writes_defaults_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_REPOSITORY_PATH);

        let created = RuleRepository::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.specs(), RuleSpec::defaults().as_slice());

        let mut changed = RuleRepository::load(&path).unwrap();
        changed.ignore_path("Assets/Plugins");
        changed.save(&path).unwrap();

        let reloaded = RuleRepository::load_or_create(&path).unwrap();
        assert_eq!(reloaded.ignored_paths, vec!["Assets/Plugins".to_string()]);
    }

    #[test]
    fn test_discover_repositories_sorted_by_path() {
        let temp = TempDir::new().unwrap();
        create_file_at_path(&temp, "Assets/Zeta/z.assetlint.yml", "enabled: false\n");
        create_file_at_path(&temp, "Assets/Alpha/a.assetlint.yaml", "enabled: true\n");
        create_file_at_path(&temp, "Assets/Alpha/notes.yml", "not: a repository\n");

        let repositories = discover_repositories(temp.path()).unwrap();
        assert_eq!(repositories.len(), 2);
        assert!(repositories[0].source().unwrap().ends_with("Assets/Alpha/a.assetlint.yaml"));
        assert!(!repositories[1].enabled);
    }

    #[test]
    fn test_discovery_skips_unreadable_repository() {
        let temp = TempDir::new().unwrap();
        create_file_at_path(&temp, "Assets/good.assetlint.yml", "enabled: true
");
        create_file_at_path(
            &temp,
            "Assets/old.assetlint.yml",
            "enabled: false
rules:
  - kind: bogus
",
        );
        create_file_at_path(&temp, "Assets/broken.assetlint.yml", "rules: [
");

        let repositories = discover_repositories(temp.path()).unwrap();
        assert_eq!(repositories.len(), 2);
        assert!(repositories[0].source().unwrap().ends_with("good.assetlint.yml"));
        assert!(repositories[1].source().unwrap().ends_with("old.assetlint.yml"));
        assert_eq!(repositories[1].config_errors().len(), 1);

        let active = active_repository(&repositories).unwrap().unwrap();
        assert!(active.source().unwrap().ends_with("good.assetlint.yml"));
    }

    #[test]
    fn test_single_enabled_repository_is_active() {
        let repositories = vec![
            RuleRepository::new().with_enabled(false),
            RuleRepository::new().with_spec(RuleSpec::VariantSuffix { priority: 0 }),
        ];

        let active = active_repository(&repositories).unwrap().unwrap();
        assert_eq!(active.rule_count(), 1);
    }

    #[test]
    fn test_no_enabled_repository_means_nothing_to_lint() {
        let repositories = vec![RuleRepository::new().with_enabled(false)];
        assert!(active_repository(&repositories).unwrap().is_none());
        assert!(active_repository(&[]).unwrap().is_none());
    }

    #[test]
    fn test_multiple_enabled_repositories_is_an_error() {
        let repositories = vec![RuleRepository::new(), RuleRepository::new()];

        match active_repository(&repositories) {
            Err(ValidationError::MultipleActiveRepositories { count, .. }) => assert_eq!(count, 2),
            other => panic!("expected MultipleActiveRepositories, got {other:?}"),
        }
    }

    #[test]
    fn test_with_spec_uses_declared_context() {
        let repository = RuleRepository::new().with_spec(RuleSpec::RegexDerived {
            context: RuleContext::Suffix,
            pattern: "[A-Z]".to_string(),
            priority: 0,
        });

        assert_eq!(suggest(&texture("Assets/Art/sky.png"), &repository), "sky_TD");
    }
}
