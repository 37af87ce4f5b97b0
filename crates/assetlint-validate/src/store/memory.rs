use std::collections::BTreeMap;

use crate::Result;
use crate::asset::{AssetRef, AssetStore};

/// Asset store backed by a map of snapshots, keyed by path
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetStore {
    assets: BTreeMap<String, AssetRef>,
}

impl InMemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, asset: AssetRef) {
        self.assets.insert(asset.path().to_string(), asset);
    }

    pub fn with_asset(mut self, asset: AssetRef) -> Self {
        self.insert(asset);
        self
    }

    pub fn remove(&mut self, path: &str) -> Option<AssetRef> {
        self.assets.remove(path)
    }

    pub fn get(&self, path: &str) -> Option<&AssetRef> {
        self.assets.get(path)
    }
}

impl AssetStore for InMemoryAssetStore {
    fn type_name(&self, path: &str) -> Option<String> {
        self.get(path)
            .and_then(AssetRef::type_name)
            .map(str::to_string)
    }

    fn is_prefab(&self, path: &str) -> bool {
        self.get(path).is_some_and(AssetRef::is_prefab)
    }

    fn is_variant(&self, path: &str) -> bool {
        self.get(path).is_some_and(AssetRef::is_variant)
    }

    fn is_script(&self, path: &str) -> bool {
        self.get(path).is_some_and(AssetRef::is_script)
    }

    fn identity(&self, path: &str) -> Option<String> {
        self.get(path)
            .and_then(AssetRef::identity)
            .map(str::to_string)
    }

    fn list_all_asset_paths(&self) -> Result<Vec<String>> {
        Ok(self
            .assets
            .keys()
            .filter(|path| path.contains('.'))
            .cloned()
            .collect())
    }
}
