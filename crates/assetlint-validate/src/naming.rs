//! Naming Convention Validation
//!
//! Checks an asset's current name against the rules resolved for it:
//! - Prefix: the name starts with the expected literal
//! - Infix: the name equals the expected full name
//! - Suffix: the expected literal closes a `_`-bounded token

use regex::Regex;
use serde::Serialize;

use crate::asset::AssetRef;
use crate::resolver::{ResolvedRules, resolve};
use crate::rules::RuleContext;
use crate::settings::RuleRepository;
use crate::suggestion::suggest_with;

define_violations! {
    pub enum NamingViolation {
        #[violation(
            id = "NAME001",
            context = Prefix,
            severity = Warning,
            message = "{name} ({path}) does not start with prefix '{expected}', suggested name is {suggested_name}"
        )]
        MissingPrefix {
            path: String,
            name: String,
            expected: String,
            suggested_name: String,
        },

        #[violation(
            id = "NAME002",
            context = Infix,
            severity = Warning,
            message = "{name} ({path}) should be named '{expected}', suggested name is {suggested_name}"
        )]
        InfixMismatch {
            path: String,
            name: String,
            expected: String,
            suggested_name: String,
        },

        #[violation(
            id = "NAME003",
            context = Suffix,
            severity = Warning,
            message = "{name} ({path}) does not end with suffix '{expected}', suggested name is {suggested_name}"
        )]
        MissingSuffix {
            path: String,
            name: String,
            expected: String,
            suggested_name: String,
        },
    }
}

/// Outcome of checking one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Whether any context resolved a rule
    pub has_rules: bool,
    pub expected_prefix: String,
    pub expected_infix: String,
    pub expected_suffix: String,
    pub prefix_ok: bool,
    pub infix_ok: bool,
    pub suffix_ok: bool,
}

impl Verdict {
    pub fn is_compliant(&self) -> bool {
        self.prefix_ok && self.infix_ok && self.suffix_ok
    }

    /// Contexts whose check failed, in prefix, infix, suffix order
    pub fn failed_contexts(&self) -> Vec<RuleContext> {
        let mut failed = Vec::new();
        if !self.prefix_ok {
            failed.push(RuleContext::Prefix);
        }
        if !self.infix_ok {
            failed.push(RuleContext::Infix);
        }
        if !self.suffix_ok {
            failed.push(RuleContext::Suffix);
        }
        failed
    }

    fn expected(&self, context: RuleContext) -> &str {
        match context {
            RuleContext::Prefix => &self.expected_prefix,
            RuleContext::Infix => &self.expected_infix,
            RuleContext::Suffix => &self.expected_suffix,
        }
    }
}

/// Whether the asset's name satisfies the rules resolved for it
pub fn is_compliant(asset: &AssetRef, repository: &RuleRepository) -> bool {
    evaluate(asset, repository).is_compliant()
}

/// Check the asset's name against every context
pub fn evaluate(asset: &AssetRef, repository: &RuleRepository) -> Verdict {
    evaluate_with(asset, &resolve(asset, repository))
}

pub(crate) fn evaluate_with(asset: &AssetRef, rules: &ResolvedRules<'_>) -> Verdict {
    let expected_prefix = rules.fix(RuleContext::Prefix, asset);
    let expected_infix = rules.fix(RuleContext::Infix, asset);
    let expected_suffix = rules.fix(RuleContext::Suffix, asset);
    let name = asset.name();

    Verdict {
        has_rules: !rules.is_empty(),
        prefix_ok: has_expected_prefix(name, &expected_prefix),
        infix_ok: has_expected_infix(name, &expected_infix),
        suffix_ok: has_expected_suffix(name, &expected_suffix),
        expected_prefix,
        expected_infix,
        expected_suffix,
    }
}

/// Every rule the asset breaks, one violation per failed context
pub fn check_asset(asset: &AssetRef, repository: &RuleRepository) -> Vec<NamingViolation> {
    let rules = resolve(asset, repository);
    let verdict = evaluate_with(asset, &rules);
    if verdict.is_compliant() {
        return Vec::new();
    }

    let suggested_name = suggest_with(asset, &rules);
    verdict
        .failed_contexts()
        .into_iter()
        .map(|context| {
            let path = asset.path().to_string();
            let name = asset.name().to_string();
            let expected = verdict.expected(context).to_string();
            let suggested_name = suggested_name.clone();
            match context {
                RuleContext::Prefix => NamingViolation::MissingPrefix {
                    path,
                    name,
                    expected,
                    suggested_name,
                },
                RuleContext::Infix => NamingViolation::InfixMismatch {
                    path,
                    name,
                    expected,
                    suggested_name,
                },
                RuleContext::Suffix => NamingViolation::MissingSuffix {
                    path,
                    name,
                    expected,
                    suggested_name,
                },
            }
        })
        .collect()
}

/// Literal, case-sensitive prefix match
pub fn has_expected_prefix(name: &str, prefix: &str) -> bool {
    prefix.is_empty() || name.starts_with(prefix)
}

/// Infix fixes are whole names, so the match is equality
pub fn has_expected_infix(name: &str, infix: &str) -> bool {
    infix.is_empty() || name == infix
}

/// The suffix must follow a run of non-underscore characters and be followed
/// by the end of the name or by `_` and anything. `UI` therefore matches
/// `PlayerUI` and `PlayerUI_Old` but not `UIPlayer`.
pub fn has_expected_suffix(name: &str, suffix: &str) -> bool {
    if suffix.is_empty() {
        return true;
    }
    Regex::new(&format!(r"([^_]+)({})($|_.*$)", regex::escape(suffix)))
        .is_ok_and(|pattern| pattern.is_match(name))
}
