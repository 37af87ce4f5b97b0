//! Declarative rule specs and the factory turning them into rules.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::asset::AssetRef;

use super::regex_derived::DEFAULT_TYPE_PATTERN;
use super::{
    NamingRule, RegexDerivedRule, ReplaceInfixRule, RuleContext, TypePrefixRule,
    VariantSuffixRule,
};
use crate::{Result, ValidationError};

fn default_regex_context() -> RuleContext {
    RuleContext::Prefix
}

fn default_regex_pattern() -> String {
    DEFAULT_TYPE_PATTERN.to_string()
}

fn default_replace() -> String {
    " ".to_string()
}

/// Declarative rule definition, as stored in a repository file
///
/// ```yaml
/// - kind: type_prefix
///   type_name: Texture2D
///   prefix: T
///   priority: 10
/// - kind: variant_suffix
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleSpec {
    TypePrefix {
        type_name: String,
        prefix: String,
        #[serde(default)]
        priority: i32,
    },
    RegexDerived {
        #[serde(default = "default_regex_context")]
        context: RuleContext,
        #[serde(default = "default_regex_pattern")]
        pattern: String,
        #[serde(default)]
        priority: i32,
    },
    VariantSuffix {
        #[serde(default)]
        priority: i32,
    },
    ReplaceInfix {
        #[serde(default = "default_replace")]
        replace: String,
        #[serde(default)]
        replacement: String,
        #[serde(default)]
        priority: i32,
    },
    /// A definition that could not be read; kept verbatim and never matches
    #[serde(skip)]
    Unrecognized {
        definition: serde_yaml::Value,
        reason: String,
    },
}

impl RuleSpec {
    /// Rules a freshly created repository starts with
    pub fn defaults() -> Vec<RuleSpec> {
        vec![
            RuleSpec::RegexDerived {
                context: RuleContext::Prefix,
                pattern: "[A-Z0-9]".to_string(),
                priority: 0,
            },
            RuleSpec::VariantSuffix { priority: 0 },
        ]
    }

    /// Read one rule definition, keeping unreadable ones as
    /// [`RuleSpec::Unrecognized`] instead of failing
    pub fn from_definition(definition: serde_yaml::Value) -> Self {
        match serde_yaml::from_value(definition.clone()) {
            Ok(spec) => spec,
            Err(e) => Self::Unrecognized {
                definition,
                reason: e.to_string(),
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::TypePrefix { .. } => "type_prefix",
            Self::RegexDerived { .. } => "regex_derived",
            Self::VariantSuffix { .. } => "variant_suffix",
            Self::ReplaceInfix { .. } => "replace_infix",
            Self::Unrecognized { .. } => "unrecognized",
        }
    }

    pub fn priority(&self) -> i32 {
        match self {
            Self::TypePrefix { priority, .. }
            | Self::RegexDerived { priority, .. }
            | Self::VariantSuffix { priority }
            | Self::ReplaceInfix { priority, .. } => *priority,
            Self::Unrecognized { .. } => 0,
        }
    }

    /// Check the spec the way a rule author would want it checked
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::TypePrefix { type_name, .. } if type_name.trim().is_empty() => Err(
                ValidationError::Config("type_prefix rule needs a type_name".to_string()),
            ),
            Self::RegexDerived {
                context: RuleContext::Infix,
                ..
            } => Err(ValidationError::Config(
                "regex_derived rule must use the prefix or suffix context".to_string(),
            )),
            Self::RegexDerived {
                pattern, context, ..
            } => RegexDerivedRule::new(pattern.as_str(), *context).map(|_| ()),
            Self::ReplaceInfix { replace, .. } if replace.is_empty() => Err(
                ValidationError::Config("replace_infix rule needs a non-empty replace".to_string()),
            ),
            Self::Unrecognized { reason, .. } => Err(ValidationError::Config(format!(
                "unrecognized rule definition: {reason}"
            ))),
            _ => Ok(()),
        }
    }
}

/// Maps rule specs to concrete rules
pub struct RuleFactory;

impl RuleFactory {
    pub const KINDS: [&'static str; 4] = [
        "type_prefix",
        "regex_derived",
        "variant_suffix",
        "replace_infix",
    ];

    /// Build a rule, rejecting invalid specs
    pub fn build(spec: &RuleSpec) -> Result<Box<dyn NamingRule>> {
        spec.validate()?;
        Ok(Self::build_lenient(spec))
    }

    /// Build a rule that degrades to "no match" when the spec is invalid
    pub fn build_lenient(spec: &RuleSpec) -> Box<dyn NamingRule> {
        match spec {
            RuleSpec::TypePrefix {
                type_name,
                prefix,
                priority,
            } => Box::new(TypePrefixRule::new(type_name.as_str(), prefix.as_str()).with_priority(*priority)),
            RuleSpec::RegexDerived {
                context,
                pattern,
                priority,
            } => Box::new(
                RegexDerivedRule::lenient(pattern.as_str(), *context).with_priority(*priority),
            ),
            RuleSpec::VariantSuffix { priority } => {
                Box::new(VariantSuffixRule::new().with_priority(*priority))
            }
            RuleSpec::ReplaceInfix {
                replace,
                replacement,
                priority,
            } => Box::new(
                ReplaceInfixRule::new(replace.as_str(), replacement.as_str())
                    .with_priority(*priority),
            ),
            RuleSpec::Unrecognized { .. } => Box::new(UnrecognizedRule),
        }
    }

    /// Build every spec, collecting configuration errors instead of failing
    pub fn build_all(specs: &[RuleSpec]) -> (Vec<Box<dyn NamingRule>>, Vec<ValidationError>) {
        let mut rules = Vec::with_capacity(specs.len());
        let mut errors = Vec::new();

        for (index, spec) in specs.iter().enumerate() {
            if let Err(e) = spec.validate() {
                error!(rule = index, kind = spec.kind(), error = %e, "Naming rule misconfigured, it will never match");
                errors.push(e);
            }
            rules.push(Self::build_lenient(spec));
        }

        (rules, errors)
    }
}

/// Stand-in for a rule definition that could not be read
#[derive(Debug, Clone, Copy)]
struct UnrecognizedRule;

impl NamingRule for UnrecognizedRule {
    fn context(&self) -> RuleContext {
        RuleContext::Prefix
    }

    fn priority(&self) -> i32 {
        0
    }

    fn applies(&self, _asset: &AssetRef) -> bool {
        false
    }

    fn fix(&self, _asset: &AssetRef) -> String {
        String::new()
    }

    fn describe(&self) -> String {
        "unrecognized rule".to_string()
    }
}
