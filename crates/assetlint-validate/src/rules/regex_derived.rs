use regex::Regex;

use super::{NamingRule, RuleContext};
use crate::asset::AssetRef;
use crate::{Result, ValidationError};

pub const DEFAULT_TYPE_PATTERN: &str = "[A-Z]";

/// Derives a prefix or suffix from the asset's type name
///
/// Every match of the pattern against the type name is concatenated, so the
/// default `[A-Z]` turns `AnimatorController` into `AC_` (prefix) or `_AC`
/// (suffix). An invalid pattern matches nothing.
#[derive(Debug, Clone)]
pub struct RegexDerivedRule {
    context: RuleContext,
    pattern: String,
    regex: Option<Regex>,
    priority: i32,
}

impl RegexDerivedRule {
    /// Compile a rule, failing on an invalid pattern
    pub fn new(pattern: impl Into<String>, context: RuleContext) -> Result<Self> {
        let pattern = pattern.into();
        let regex = Regex::new(&pattern)
            .map_err(|e| ValidationError::InvalidRegex(format!("{pattern}: {e}")))?;
        Ok(Self {
            context,
            pattern,
            regex: Some(regex),
            priority: 0,
        })
    }

    /// Compile a rule, degrading an invalid pattern to one that never matches
    pub fn lenient(pattern: impl Into<String>, context: RuleContext) -> Self {
        let pattern = pattern.into();
        let regex = Regex::new(&pattern).ok();
        Self {
            context,
            pattern,
            regex,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    /// All matches against `input`, concatenated
    pub fn matches_of(&self, input: &str) -> String {
        let Some(regex) = &self.regex else {
            return String::new();
        };
        regex.find_iter(input).map(|m| m.as_str()).collect()
    }
}

impl NamingRule for RegexDerivedRule {
    fn context(&self) -> RuleContext {
        self.context
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn applies(&self, _asset: &AssetRef) -> bool {
        true
    }

    fn fix(&self, asset: &AssetRef) -> String {
        let derived = self.matches_of(asset.type_name().unwrap_or_default());
        if derived.is_empty() {
            return String::new();
        }
        match self.context {
            RuleContext::Prefix => format!("{derived}_"),
            RuleContext::Suffix => format!("_{derived}"),
            RuleContext::Infix => String::new(),
        }
    }

    fn describe(&self) -> String {
        format!("{} derived from type by /{}/", self.context, self.pattern)
    }
}
