//! Asset store over a Unity-style project directory.
//!
//! Assets live under `<root>/Assets`, each with a sibling `.meta` file that
//! carries its GUID. Paths handed to and returned by the store are relative to
//! the project root and always use `/` as separator (`Assets/Art/player.png`).

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::Result;
use crate::asset::AssetStore;

const ASSETS_DIR: &str = "Assets";
const META_EXTENSION: &str = "meta";
/// Class id 1001 is `PrefabInstance`; a variant's file starts with one.
const PREFAB_INSTANCE_HEADER: &str = "--- !u!1001 ";
const DEFAULT_ASSET_TYPE: &str = "DefaultAsset";

/// Main asset type for a file extension (case-insensitive)
pub fn type_name_for_extension(extension: &str) -> Option<&'static str> {
    let type_name = match extension.to_ascii_lowercase().as_str() {
        "png" | "jpg" | "jpeg" | "tga" | "psd" | "tif" | "tiff" | "bmp" | "gif" | "exr"
        | "hdr" => "Texture2D",
        "prefab" | "fbx" | "obj" | "blend" | "dae" | "3ds" | "max" => "GameObject",
        "cs" => "MonoScript",
        "mat" => "Material",
        "shader" => "Shader",
        "compute" => "ComputeShader",
        "unity" => "SceneAsset",
        "anim" => "AnimationClip",
        "controller" => "AnimatorController",
        "overridecontroller" => "AnimatorOverrideController",
        "mask" => "AvatarMask",
        "wav" | "mp3" | "ogg" | "aif" | "aiff" => "AudioClip",
        "mixer" => "AudioMixerController",
        "ttf" | "otf" => "Font",
        "asset" => "ScriptableObject",
        "physicmaterial" => "PhysicMaterial",
        "rendertexture" => "RenderTexture",
        "spriteatlas" => "SpriteAtlas",
        "playable" => "TimelineAsset",
        "txt" | "json" | "xml" | "csv" | "bytes" | "yaml" => "TextAsset",
        "asmdef" => "AssemblyDefinitionAsset",
        "mp4" | "mov" | "webm" => "VideoClip",
        _ => return None,
    };
    Some(type_name)
}

/// Asset store reading a project tree from disk
#[derive(Debug, Clone)]
pub struct FileSystemAssetStore {
    root: PathBuf,
}

impl FileSystemAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a project-relative asset path
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    fn meta_path(&self, path: &str) -> PathBuf {
        self.root.join(format!("{path}.{META_EXTENSION}"))
    }

    fn extension(path: &str) -> Option<&str> {
        let segment = path.rsplit('/').next().unwrap_or(path);
        segment.rfind('.').map(|dot| &segment[dot + 1..])
    }

    fn is_file(&self, path: &str) -> bool {
        self.resolve_path(path).is_file()
    }

    fn is_visible(entry: &DirEntry) -> bool {
        entry
            .file_name()
            .to_str()
            .is_some_and(|name| !name.starts_with('.') && !name.ends_with('~'))
    }

    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let segments: Option<Vec<&str>> = relative.iter().map(|s| s.to_str()).collect();
        segments.map(|segments| segments.join("/"))
    }
}

impl AssetStore for FileSystemAssetStore {
    fn type_name(&self, path: &str) -> Option<String> {
        if !self.is_file(path) {
            return None;
        }
        let type_name = Self::extension(path)
            .and_then(type_name_for_extension)
            .unwrap_or(DEFAULT_ASSET_TYPE);
        Some(type_name.to_string())
    }

    fn is_prefab(&self, path: &str) -> bool {
        Self::extension(path).is_some_and(|ext| ext.eq_ignore_ascii_case("prefab"))
            && self.is_file(path)
    }

    fn is_variant(&self, path: &str) -> bool {
        if !self.is_prefab(path) {
            return false;
        }
        let Ok(content) = std::fs::read_to_string(self.resolve_path(path)) else {
            debug!(path, "Prefab could not be read, treating as non-variant");
            return false;
        };
        content
            .lines()
            .find(|line| line.starts_with("--- !u!"))
            .is_some_and(|header| header.starts_with(PREFAB_INSTANCE_HEADER))
    }

    fn is_script(&self, path: &str) -> bool {
        Self::extension(path).is_some_and(|ext| ext.eq_ignore_ascii_case("cs")) && self.is_file(path)
    }

    fn identity(&self, path: &str) -> Option<String> {
        let meta = std::fs::read_to_string(self.meta_path(path)).ok()?;
        meta.lines()
            .filter_map(|line| line.trim().strip_prefix("guid:"))
            .map(|guid| guid.trim().to_string())
            .find(|guid| !guid.is_empty())
    }

    fn list_all_asset_paths(&self) -> Result<Vec<String>> {
        let assets_dir = self.root.join(ASSETS_DIR);
        if !assets_dir.is_dir() {
            debug!(dir = %assets_dir.display(), "No assets directory");
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&assets_dir)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || Self::is_visible(e))
        {
            let entry = entry.map_err(|e| crate::ValidationError::Io(std::io::Error::other(e)))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry
                .path()
                .extension()
                .is_some_and(|ext| ext == META_EXTENSION)
            {
                continue;
            }
            if let Some(relative) = self.relative_path(entry.path()) {
                if relative.contains('.') {
                    paths.push(relative);
                }
            }
        }

        paths.sort();
        Ok(paths)
    }
}
