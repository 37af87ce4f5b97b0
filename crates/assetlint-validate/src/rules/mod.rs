//! Naming Rules
//!
//! A rule constrains one part of an asset name: its start (prefix), its end
//! (suffix) or the whole base name (infix). Rules are built from
//! declarative [`RuleSpec`] entries by the [`RuleFactory`].

mod factory;
mod regex_derived;
mod replace_infix;
mod type_prefix;
mod variant_suffix;

pub use factory::{RuleFactory, RuleSpec};
pub use regex_derived::RegexDerivedRule;
pub use replace_infix::ReplaceInfixRule;
pub use type_prefix::TypePrefixRule;
pub use variant_suffix::VariantSuffixRule;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::asset::AssetRef;

/// The part of the name a rule constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleContext {
    Prefix,
    Suffix,
    Infix,
}

impl RuleContext {
    pub const ALL: [RuleContext; 3] = [Self::Prefix, Self::Infix, Self::Suffix];
}

impl fmt::Display for RuleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix => write!(f, "prefix"),
            Self::Suffix => write!(f, "suffix"),
            Self::Infix => write!(f, "infix"),
        }
    }
}

/// A single naming constraint
pub trait NamingRule: fmt::Debug + Send + Sync {
    /// Fixed per rule instance
    fn context(&self) -> RuleContext;

    /// Breaks ties between rules applicable to the same asset and context
    fn priority(&self) -> i32;

    /// Whether the rule applies to the asset. Must be side-effect free.
    fn applies(&self, asset: &AssetRef) -> bool;

    /// Expected prefix or suffix literal, or for infix rules the entire
    /// expected name. Only called on the winning rule.
    fn fix(&self, asset: &AssetRef) -> String;

    /// Short label used in logs
    fn describe(&self) -> String;
}
