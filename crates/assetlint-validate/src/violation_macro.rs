//! Violation Definition Macro
//!
//! Provides a declarative macro for defining violation enums with
//! automatic trait implementations.
//!
//! # Example
//!
//! ```ignore
//! define_violations! {
//!     pub enum NamingViolation {
//!         #[violation(
//!             id = "NAME001",
//!             context = Prefix,
//!             severity = Warning,
//!             message = "{name} at {path} does not start with '{expected}' (suggested: {suggested_name})"
//!         )]
//!         MissingPrefix {
//!             path: String,
//!             name: String,
//!             expected: String,
//!             suggested_name: String,
//!         },
//!     }
//! }
//! ```

/// Macro to define violation enums with automatic trait implementations
///
/// This macro generates:
/// - The enum with all variants
/// - `Display` implementation with formatted messages
/// - `Violation` trait implementation
///
/// # Parameters
///
/// - `$vis`: Visibility modifier (pub, pub(crate), etc.)
/// - `$name`: Name of the enum
/// - For each variant:
///   - `id`: Unique violation identifier (e.g., "NAME001")
///   - `context`: `RuleContext` variant the violation belongs to
///   - `severity`: Error, Warning, or Info
///   - `message`: Display message; every field must appear as a `{field}` placeholder
///   - Fields must include `path: String` and `suggested_name: String`
#[macro_export]
macro_rules! define_violations {
    (
        $vis:vis enum $name:ident {
            $(
                #[violation(
                    id = $id:literal,
                    context = $context:ident,
                    severity = $severity:ident,
                    message = $msg:literal
                )]
                $variant:ident {
                    $( $field:ident : $field_ty:ty ),* $(,)?
                }
            ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
        $vis enum $name {
            $( $variant { $( $field: $field_ty ),* } ),*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            write!(f, $msg, $( $field = $field ),*)
                        }
                    ),*
                }
            }
        }

        impl $crate::violation_trait::Violation for $name {
            fn id(&self) -> &str {
                match self {
                    $( Self::$variant { .. } => $id ),*
                }
            }

            fn context(&self) -> $crate::rules::RuleContext {
                match self {
                    $( Self::$variant { .. } => $crate::rules::RuleContext::$context ),*
                }
            }

            fn severity(&self) -> $crate::violation_trait::Severity {
                match self {
                    $( Self::$variant { .. } => $crate::violation_trait::Severity::$severity ),*
                }
            }

            fn path(&self) -> &str {
                match self {
                    $( Self::$variant { path, .. } => path.as_str() ),*
                }
            }

            fn suggestion(&self) -> Option<String> {
                match self {
                    $(
                        Self::$variant { suggested_name, .. } => {
                            Some(format!("Rename to '{}'", suggested_name))
                        }
                    ),*
                }
            }
        }
    };
}
