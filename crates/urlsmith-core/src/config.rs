use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/urlsmith/config.toml`.
///
/// The `[templates]` table maps short names to base URL strings; the CLI
/// resolves `@name` URL arguments through it, so variants of a common URL
/// can be built without retyping the base.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlsmithConfig {
    /// Named base URLs, referenced as `@name` on the command line.
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsmith")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlsmithConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlsmithConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlsmithConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_templates() {
        let cfg = UrlsmithConfig::default();
        assert!(cfg.templates.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = UrlsmithConfig::default();
        cfg.templates.insert(
            "api".to_string(),
            "https://api.example.com/v1/search?limit=20".to_string(),
        );
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlsmithConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.templates, cfg.templates);
    }

    #[test]
    fn config_toml_templates_table() {
        let toml = r#"
            [templates]
            api = "https://api.example.com/v1/search?limit=20"
            cdn = "https://cdn.example.com:8443/assets"
        "#;
        let cfg: UrlsmithConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.templates.len(), 2);
        assert_eq!(
            cfg.templates.get("api").unwrap(),
            "https://api.example.com/v1/search?limit=20"
        );
        assert_eq!(
            cfg.templates.get("cdn").unwrap(),
            "https://cdn.example.com:8443/assets"
        );
    }

    #[test]
    fn config_toml_missing_table_is_empty() {
        let cfg: UrlsmithConfig = toml::from_str("").unwrap();
        assert!(cfg.templates.is_empty());
    }
}
