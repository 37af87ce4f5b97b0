use super::{NamingRule, RuleContext};
use crate::asset::AssetRef;

pub const VARIANT_SUFFIX: &str = "_Variant";

/// Requires `_Variant` at the end of every prefab variant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSuffixRule {
    priority: i32,
}

impl VariantSuffixRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl NamingRule for VariantSuffixRule {
    fn context(&self) -> RuleContext {
        RuleContext::Suffix
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn applies(&self, asset: &AssetRef) -> bool {
        asset.is_prefab() && asset.is_variant()
    }

    fn fix(&self, _asset: &AssetRef) -> String {
        VARIANT_SUFFIX.to_string()
    }

    fn describe(&self) -> String {
        format!("variant suffix '{VARIANT_SUFFIX}'")
    }
}
