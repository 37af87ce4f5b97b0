//! Tests for naming convention validation

#[cfg(test)]
mod naming_tests {
    use assetlint_validate::naming::{check_asset, has_expected_prefix, has_expected_suffix};
    use assetlint_validate::{
        AssetRef, NamingViolation, RegexDerivedRule, ReplaceInfixRule, RuleContext,
        RuleRepository, Severity, Violation, ViolationExt, evaluate, is_compliant,
    };

    use crate::test_utils::{
        FixedRule, prefab_variant, script, texture, texture_and_variant_repository,
    };

    fn suffix_repository(suffix: &str) -> RuleRepository {
        RuleRepository::new().with_rule(FixedRule::new(RuleContext::Suffix, suffix))
    }

    #[test]
    fn test_suffix_bounded_by_end_of_name() {
        let repository = suffix_repository("UI");
        assert!(is_compliant(&AssetRef::new("Assets/UI/PlayerUI.prefab"), &repository));
    }

    #[test]
    fn test_suffix_not_trailing_is_rejected() {
        let repository = suffix_repository("UI");
        assert!(!is_compliant(&AssetRef::new("Assets/UI/UIPlayer.prefab"), &repository));
    }

    #[test]
    fn test_suffix_bounded_by_underscore() {
        assert!(has_expected_suffix("PlayerUI_Old", "UI"));
        assert!(has_expected_suffix("Enemy_Variant", "_Variant"));
        assert!(!has_expected_suffix("UI", "UI"));
        assert!(!has_expected_suffix("PlayerUIx", "UI"));
    }

    #[test]
    fn test_suffix_is_matched_literally() {
        assert!(has_expected_suffix("Rock.LOD", ".LOD"));
        assert!(!has_expected_suffix("RockxLOD", ".LOD"));
        assert!(has_expected_suffix("Clip(1)", "(1)"));
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert!(has_expected_prefix("T_player", "T_"));
        assert!(!has_expected_prefix("t_player", "T_"));
        assert!(has_expected_prefix("anything", ""));
    }

    #[test]
    fn test_no_rules_is_compliant() {
        let asset = texture("Assets/Art/whatever name.png");
        let verdict = evaluate(&asset, &RuleRepository::new());

        assert!(verdict.is_compliant());
        assert!(!verdict.has_rules);
    }

    #[test]
    fn test_missing_type_prefix() {
        let repository = texture_and_variant_repository();
        let verdict = evaluate(&texture("Assets/Art/player.png"), &repository);

        assert!(!verdict.is_compliant());
        assert!(!verdict.prefix_ok);
        assert!(verdict.infix_ok);
        assert!(verdict.suffix_ok);
        assert_eq!(verdict.expected_prefix, "T_");
        assert_eq!(verdict.failed_contexts(), vec![RuleContext::Prefix]);
    }

    #[test]
    fn test_variant_with_suffix_is_compliant() {
        let repository = texture_and_variant_repository();
        let asset = prefab_variant("Assets/Prefabs/Enemy_Variant.prefab");

        let verdict = evaluate(&asset, &repository);
        assert_eq!(verdict.expected_suffix, "_Variant");
        assert!(verdict.is_compliant());
    }

    #[test]
    fn test_variant_without_suffix_violates() {
        let repository = texture_and_variant_repository();
        assert!(!is_compliant(
            &prefab_variant("Assets/Prefabs/Enemy.prefab"),
            &repository
        ));
    }

    #[test]
    fn test_script_is_exempt_from_prefix() {
        let repository = RuleRepository::new()
            .with_rule(FixedRule::new(RuleContext::Prefix, "S_").for_type("MonoScript"));

        assert!(is_compliant(&script("Assets/Scripts/player controller.cs"), &repository));
    }

    #[test]
    fn test_infix_requires_exact_name() {
        let repository = RuleRepository::new().with_rule(ReplaceInfixRule::default());

        assert!(!is_compliant(&texture("Assets/UI/Main Menu.png"), &repository));
        assert!(is_compliant(&texture("Assets/UI/MainMenu.png"), &repository));
    }

    #[test]
    fn test_regex_derived_prefix() {
        let repository = RuleRepository::new().with_rule(RegexDerivedRule::lenient("[A-Z]", RuleContext::Prefix));
        let asset = AssetRef::new("Assets/Anim/Hero.controller").with_type_name("AnimatorController");

        let verdict = evaluate(&asset, &repository);
        assert_eq!(verdict.expected_prefix, "AC_");
        assert!(!verdict.is_compliant());
        assert!(is_compliant(&asset.renamed("AC_Hero"), &repository));
    }

    #[test]
    fn test_invalid_regex_never_constrains() {
        let repository = RuleRepository::new().with_rule(RegexDerivedRule::lenient("[A-Z", RuleContext::Prefix));
        assert!(is_compliant(&texture("Assets/Art/player.png"), &repository));
    }

    #[test]
    fn test_check_asset_reports_each_failed_context() {
        let repository = RuleRepository::new()
            .with_rule(FixedRule::new(RuleContext::Prefix, "P_"))
            .with_rule(FixedRule::new(RuleContext::Suffix, "_S"));
        let violations = check_asset(&texture("Assets/Art/player.png"), &repository);

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].id(), "NAME001");
        assert_eq!(violations[0].context(), RuleContext::Prefix);
        assert_eq!(violations[1].id(), "NAME003");
        assert_eq!(violations[1].context(), RuleContext::Suffix);
        for violation in &violations {
            assert_eq!(violation.severity(), Severity::Warning);
            assert_eq!(violation.path(), "Assets/Art/player.png");
            assert_eq!(violation.suggestion().as_deref(), Some("Rename to 'P_player_S'"));
        }
    }

    #[test]
    fn test_violation_message_names_asset_and_fix() {
        let violations = check_asset(
            &texture("Assets/Art/player.png"),
            &texture_and_variant_repository(),
        );

        assert_eq!(
            violations,
            vec![NamingViolation::MissingPrefix {
                path: "Assets/Art/player.png".to_string(),
                name: "player".to_string(),
                expected: "T_".to_string(),
                suggested_name: "T_player".to_string(),
            }]
        );
        let message = violations[0].to_string();
        assert!(message.contains("player (Assets/Art/player.png)"));
        assert!(message.contains("'T_'"));
        assert!(message.contains("T_player"));
    }

    #[test]
    fn test_compliant_asset_has_no_violations() {
        let violations = check_asset(
            &texture("Assets/Art/T_player.png"),
            &texture_and_variant_repository(),
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_violations_box_into_trait_objects() {
        let violations = check_asset(
            &prefab_variant("Assets/Prefabs/enemy.prefab"),
            &texture_and_variant_repository(),
        );
        let single = violations[0].clone().boxed();
        assert_eq!(single.severity(), Severity::Warning);

        let boxed = violations.into_boxed();

        assert_eq!(boxed.len(), 1);
        assert_eq!(boxed[0].id(), "NAME003");
        assert_eq!(boxed[0].context(), RuleContext::Suffix);
        assert_eq!(boxed[0].path(), "Assets/Prefabs/enemy.prefab");
        assert!(boxed[0].message().contains("'_Variant'"));
    }
}
