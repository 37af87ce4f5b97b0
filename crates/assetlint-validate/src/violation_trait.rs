//! Violation Trait
//!
//! Generic trait for naming violations. Reporters and the command line
//! front-end only see this trait, never the concrete enums.

use std::fmt::Display;

use crate::rules::RuleContext;

pub use super::Severity;

/// Generic violation trait - all violations implement this
pub trait Violation: Display + Send + Sync {
    /// Unique violation ID (e.g., "NAME001")
    fn id(&self) -> &str;

    /// Rule context that produced the violation
    fn context(&self) -> RuleContext;

    /// Severity level
    fn severity(&self) -> Severity;

    /// Path of the violating asset
    fn path(&self) -> &str;

    /// Human-readable message describing the violation
    fn message(&self) -> String {
        self.to_string()
    }

    /// Suggested fix for the violation (if applicable)
    fn suggestion(&self) -> Option<String> {
        None
    }

    /// Convert to a boxed trait object for dynamic dispatch
    fn boxed(self) -> Box<dyn Violation>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// Extension trait for converting violations to boxed trait objects
pub trait ViolationExt {
    /// Convert to a vector of boxed violations
    fn into_boxed(self) -> Vec<Box<dyn Violation>>;
}

impl<T: Violation + 'static> ViolationExt for Vec<T> {
    fn into_boxed(self) -> Vec<Box<dyn Violation>> {
        self.into_iter()
            .map(|v| Box::new(v) as Box<dyn Violation>)
            .collect()
    }
}
