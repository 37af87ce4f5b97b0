use super::{NamingRule, RuleContext};
use crate::asset::AssetRef;

/// Normalizes the whole base name by replacing a literal section
///
/// The default replaces spaces with nothing, so `Main Menu` is expected to be
/// named `MainMenu`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceInfixRule {
    replace: String,
    replacement: String,
    priority: i32,
}

impl Default for ReplaceInfixRule {
    fn default() -> Self {
        Self::new(" ", "")
    }
}

impl ReplaceInfixRule {
    pub fn new(replace: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            replace: replace.into(),
            replacement: replacement.into(),
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl NamingRule for ReplaceInfixRule {
    fn context(&self) -> RuleContext {
        RuleContext::Infix
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn applies(&self, _asset: &AssetRef) -> bool {
        true
    }

    fn fix(&self, asset: &AssetRef) -> String {
        // An empty pattern would match between every character.
        if self.replace.is_empty() {
            return asset.name().to_string();
        }
        asset.name().replace(&self.replace, &self.replacement)
    }

    fn describe(&self) -> String {
        format!("replace '{}' with '{}'", self.replace, self.replacement)
    }
}
