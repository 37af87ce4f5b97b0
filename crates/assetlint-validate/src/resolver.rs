//! Rule set resolution
//!
//! Picks, for each context independently, the single rule that governs an
//! asset: the applicable rule with the highest priority, the earliest one in
//! authoring order on ties.

use crate::asset::AssetRef;
use crate::ignore::is_ignored;
use crate::rules::{NamingRule, RuleContext};
use crate::settings::RuleRepository;

/// The winning rule per context (each optional)
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolvedRules<'a> {
    pub prefix: Option<&'a dyn NamingRule>,
    pub infix: Option<&'a dyn NamingRule>,
    pub suffix: Option<&'a dyn NamingRule>,
}

impl<'a> ResolvedRules<'a> {
    pub fn get(&self, context: RuleContext) -> Option<&'a dyn NamingRule> {
        match context {
            RuleContext::Prefix => self.prefix,
            RuleContext::Infix => self.infix,
            RuleContext::Suffix => self.suffix,
        }
    }

    /// True when no context has a rule
    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.infix.is_none() && self.suffix.is_none()
    }

    /// Fix of the winning rule for `context`, empty when there is none
    pub fn fix(&self, context: RuleContext, asset: &AssetRef) -> String {
        self.get(context)
            .map(|rule| rule.fix(asset))
            .unwrap_or_default()
    }
}

/// Resolve the governing rules for an asset
///
/// Ignored assets get no rules at all. Scripts get no prefix or suffix rule
/// when the repository ignores script assets; infix rules still apply to them.
pub fn resolve<'a>(asset: &AssetRef, repository: &'a RuleRepository) -> ResolvedRules<'a> {
    if is_ignored(asset, repository) {
        return ResolvedRules::default();
    }

    let scripts_exempt = repository.ignore_script_assets && asset.is_script();
    let unless_exempt = |context| {
        if scripts_exempt {
            None
        } else {
            resolve_context(asset, repository, context)
        }
    };

    ResolvedRules {
        prefix: unless_exempt(RuleContext::Prefix),
        infix: resolve_context(asset, repository, RuleContext::Infix),
        suffix: unless_exempt(RuleContext::Suffix),
    }
}

/// Highest-priority applicable rule for one context
pub fn resolve_context<'a>(
    asset: &AssetRef,
    repository: &'a RuleRepository,
    context: RuleContext,
) -> Option<&'a dyn NamingRule> {
    let mut winner: Option<&'a dyn NamingRule> = None;

    for rule in repository.rules() {
        if rule.context() != context || !rule.applies(asset) {
            continue;
        }
        match winner {
            Some(current) if current.priority() >= rule.priority() => {}
            _ => winner = Some(rule),
        }
    }

    winner
}
