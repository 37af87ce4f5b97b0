//! Shared test utilities for assetlint tests

#![allow(dead_code)] // Test utilities may not all be used in every test file

use std::fs;

use assetlint::AppConfig;
use tempfile::TempDir;

pub const REPOSITORY_YAML: &str = r#"
rules:
  - kind: type_prefix
    type_name: Texture2D
    prefix: T
  - kind: variant_suffix
ignored_assets:
  - Assets/Editor/naming.assetlint.yml
"#;

pub const PREFAB_VARIANT_CONTENT: &str = "%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!1001 &100100000
PrefabInstance:
  m_ObjectHideFlags: 0
";

/// Create a file at a specific path within the temp directory
pub fn create_file_at_path(temp: &TempDir, relative_path: &str, content: &str) {
    let full_path = temp.path().join(relative_path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full_path, content).unwrap();
}

/// Project with one repository, one bad texture, one good texture and a
/// variant missing its suffix
pub fn sample_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    create_file_at_path(&temp, "Assets/Editor/naming.assetlint.yml", REPOSITORY_YAML);
    create_file_at_path(&temp, "Assets/Art/player.png", "png");
    create_file_at_path(&temp, "Assets/Art/player.png.meta", "guid: 1111\n");
    create_file_at_path(&temp, "Assets/Art/T_enemy.png", "png");
    create_file_at_path(&temp, "Assets/Prefabs/Boss.prefab", PREFAB_VARIANT_CONTENT);
    temp
}

/// Configuration pointing at `temp`
pub fn config_for(temp: &TempDir) -> AppConfig {
    AppConfig {
        project_root: temp.path().to_path_buf(),
        ..AppConfig::default()
    }
}
