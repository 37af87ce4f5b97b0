//! Ignore filter

use crate::asset::AssetRef;
use crate::settings::RuleRepository;

/// Whether the asset is excluded from linting
///
/// An asset is ignored when its identity or exact path is listed in
/// `ignored_assets`, or when its path *contains* any non-blank entry of
/// `ignored_paths`. Containment is deliberately loose: `Art` also ignores
/// `Assets/ArtDirection/x.png`.
pub fn is_ignored(asset: &AssetRef, repository: &RuleRepository) -> bool {
    is_path_ignored(asset.path(), repository) || is_asset_ignored(asset, repository)
}

pub fn is_path_ignored(path: &str, repository: &RuleRepository) -> bool {
    repository
        .ignored_paths
        .iter()
        .filter(|ignored| !ignored.trim().is_empty())
        .any(|ignored| path.contains(ignored.as_str()))
}

fn is_asset_ignored(asset: &AssetRef, repository: &RuleRepository) -> bool {
    repository
        .ignored_assets
        .iter()
        .filter(|ignored| !ignored.trim().is_empty())
        .any(|ignored| asset.identity() == Some(ignored.as_str()) || asset.path() == ignored)
}
