//! Asset snapshots and the asset store port.

use serde::Serialize;

use crate::Result;

/// Extracts an asset's bare name from its path.
///
/// Takes the text after the last `/` and before the last `.` of that
/// segment. Returns an empty string when the final segment has no
/// extension separator.
pub fn name_of(path: &str) -> String {
    let segment = path.rsplit('/').next().unwrap_or(path);
    match segment.rfind('.') {
        Some(dot) => segment[..dot].to_string(),
        None => String::new(),
    }
}

/// Read-only view of the project's assets.
///
/// Lookups never fail: a path the store does not know yields `None` for the
/// type name and identity and `false` for every flag.
pub trait AssetStore {
    /// Simple name of the asset at `path`
    fn name(&self, path: &str) -> String {
        name_of(path)
    }

    /// Declared content type (e.g. "Texture2D")
    fn type_name(&self, path: &str) -> Option<String>;

    fn is_prefab(&self, path: &str) -> bool;

    fn is_variant(&self, path: &str) -> bool;

    fn is_script(&self, path: &str) -> bool;

    /// Stable identity of the asset, independent of its path
    fn identity(&self, path: &str) -> Option<String>;

    /// Every asset path in the project
    fn list_all_asset_paths(&self) -> Result<Vec<String>>;
}

/// Immutable snapshot of an asset taken at evaluation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRef {
    path: String,
    name: String,
    type_name: Option<String>,
    is_prefab: bool,
    is_variant: bool,
    is_script: bool,
    identity: Option<String>,
}

impl AssetRef {
    /// Create a bare asset reference; the name is derived from the path
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = name_of(&path);
        Self {
            path,
            name,
            type_name: None,
            is_prefab: false,
            is_variant: false,
            is_script: false,
            identity: None,
        }
    }

    /// Take a snapshot of the asset at `path` from a store
    pub fn snapshot<S: AssetStore + ?Sized>(store: &S, path: &str) -> Self {
        let is_variant = store.is_variant(path);
        Self {
            path: path.to_string(),
            name: store.name(path),
            type_name: store.type_name(path),
            is_prefab: is_variant || store.is_prefab(path),
            is_variant,
            is_script: store.is_script(path),
            identity: store.identity(path),
        }
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn prefab(mut self) -> Self {
        self.is_prefab = true;
        self
    }

    /// Mark as a prefab variant (implies prefab)
    pub fn variant(mut self) -> Self {
        self.is_prefab = true;
        self.is_variant = true;
        self
    }

    pub fn script(mut self) -> Self {
        self.is_script = true;
        self
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Same asset seen under another name
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Same asset moved to another path; the name follows the path
    pub fn relocated(&self, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: name_of(&path),
            path,
            ..self.clone()
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn is_prefab(&self) -> bool {
        self.is_prefab
    }

    pub fn is_variant(&self) -> bool {
        self.is_variant
    }

    pub fn is_script(&self) -> bool {
        self.is_script
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }
}
