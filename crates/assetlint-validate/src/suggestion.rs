//! Suggested names
//!
//! A suggestion is built from the current name with its existing fixes and
//! every underscore removed: the infix rule (if any) rewrites that base, then
//! the expected prefix is prepended and the expected suffix appended.

use crate::asset::AssetRef;
use crate::resolver::{ResolvedRules, resolve};
use crate::rules::RuleContext;
use crate::settings::RuleRepository;

/// Corrected name for the asset under the rules resolved for it
///
/// Assets without any rule (including ignored ones) keep their name.
pub fn suggest(asset: &AssetRef, repository: &RuleRepository) -> String {
    suggest_with(asset, &resolve(asset, repository))
}

pub(crate) fn suggest_with(asset: &AssetRef, rules: &ResolvedRules<'_>) -> String {
    if rules.is_empty() {
        return asset.name().to_string();
    }

    let prefix = rules.fix(RuleContext::Prefix, asset);
    let suffix = rules.fix(RuleContext::Suffix, asset);

    let mut base = asset.name();
    if !prefix.is_empty() {
        base = base.strip_prefix(prefix.as_str()).unwrap_or(base);
    }
    if !suffix.is_empty() {
        base = base.strip_suffix(suffix.as_str()).unwrap_or(base);
    }
    let mut base = base.replace('_', "");
    // A suffix needs a base in front of it; a name made only of its fixes
    // keeps them as the base, so `_Variant` becomes `Variant_Variant`.
    if base.is_empty() {
        base = asset.name().replace('_', "");
    }

    if let Some(infix) = rules.infix {
        base = infix.fix(&asset.renamed(base));
    }

    format!("{prefix}{base}{suffix}")
}
