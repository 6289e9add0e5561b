//! User settings stored as TOML.
//!
//! The file lives at `~/.config/longbox/settings.toml` unless a path is given
//! explicitly. Missing sections and keys fall back to their defaults, so a
//! partial file is always valid.

use std::io;
use std::path::{Path, PathBuf};

use longbox_core::Provider;
use longbox_sidecar::SidecarKind;
use serde::{Deserialize, Serialize};

const MASK: &str = "********";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub outputs: OutputSettings,
    #[serde(default)]
    pub providers: ProviderSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(default = "default_collection_root")]
    pub collection_root: PathBuf,
    #[serde(default = "default_output_format")]
    pub output_format: String,
    /// Catalog source names, highest precedence first.
    #[serde(default)]
    pub resolution_order: Vec<String>,
    #[serde(default)]
    pub resolve_manually: bool,
    /// Directory of `{provider}.yaml` files for the local catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_dir: Option<PathBuf>,
    /// Where archives are extracted while they are processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
}

fn default_collection_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("comics")
        .join("collection")
}

fn default_output_format() -> String {
    "cbz".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            collection_root: default_collection_root(),
            output_format: default_output_format(),
            resolution_order: Vec::new(),
            resolve_manually: false,
            catalog_dir: None,
            cache_dir: None,
        }
    }
}

impl GeneralSettings {
    /// Configured cache directory, or `~/.cache/longbox`.
    pub fn cache_root(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("longbox")
        })
    }
}

/// Which sidecars are written into each archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_true")]
    pub metadata_json: bool,
    #[serde(default = "default_true")]
    pub comic_info: bool,
    #[serde(default)]
    pub comic_data: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            metadata_json: true,
            comic_info: true,
            comic_data: false,
        }
    }
}

impl OutputSettings {
    pub fn kinds(&self) -> Vec<SidecarKind> {
        let mut kinds = Vec::new();
        if self.metadata_json {
            kinds.push(SidecarKind::MetadataJson);
        }
        if self.comic_data {
            kinds.push(SidecarKind::ComicData);
        }
        if self.comic_info {
            kinds.push(SidecarKind::ComicInfo);
        }
        kinds
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComicvineCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetronCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarvelCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub comicvine: ComicvineCredentials,
    #[serde(default)]
    pub metron: MetronCredentials,
    #[serde(default)]
    pub league_of_comic_geeks: LeagueCredentials,
    #[serde(default)]
    pub marvel: MarvelCredentials,
}

fn has(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn mask(value: &mut Option<String>) {
    if has(value) {
        *value = Some(MASK.to_string());
    }
}

impl ProviderSettings {
    /// Whether every credential the provider needs is filled in.
    /// The Grand Comics Database needs none.
    pub fn is_configured(&self, provider: Provider) -> bool {
        match provider {
            Provider::Comicvine => has(&self.comicvine.api_key),
            Provider::GrandComicsDatabase => true,
            Provider::LeagueOfComicGeeks => {
                has(&self.league_of_comic_geeks.api_key) && has(&self.league_of_comic_geeks.client_id)
            }
            Provider::Marvel => has(&self.marvel.public_key) && has(&self.marvel.private_key),
            Provider::Metron => has(&self.metron.username) && has(&self.metron.password),
        }
    }
}

impl Settings {
    /// Copy with every secret replaced, for display.
    pub fn masked(&self) -> Settings {
        let mut copy = self.clone();
        let p = &mut copy.providers;
        mask(&mut p.comicvine.api_key);
        mask(&mut p.metron.password);
        mask(&mut p.league_of_comic_geeks.api_key);
        mask(&mut p.marvel.private_key);
        copy
    }

    pub fn to_toml(&self) -> io::Result<String> {
        toml::to_string_pretty(self).map_err(io::Error::other)
    }
}

/// Returns `~/.config/longbox/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("longbox").join("settings.toml")
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

/// Save settings to `path` atomically (write to temp, then rename).
pub fn save_settings_to(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = settings.to_toml()?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
