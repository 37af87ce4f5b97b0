use super::{NamingRule, RuleContext};
use crate::asset::AssetRef;

/// Requires a literal prefix on every asset of one type
///
/// The separator is implied: prefix `T` expects names like `T_player`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePrefixRule {
    type_name: String,
    prefix: String,
    priority: i32,
}

impl TypePrefixRule {
    pub fn new(type_name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            prefix: prefix.into(),
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl NamingRule for TypePrefixRule {
    fn context(&self) -> RuleContext {
        RuleContext::Prefix
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn applies(&self, asset: &AssetRef) -> bool {
        asset.type_name() == Some(self.type_name.as_str())
    }

    fn fix(&self, _asset: &AssetRef) -> String {
        if self.prefix.is_empty() {
            String::new()
        } else {
            format!("{}_", self.prefix)
        }
    }

    fn describe(&self) -> String {
        format!("type prefix '{}' for {}", self.prefix, self.type_name)
    }
}
