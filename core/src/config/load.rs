// core/src/config/load.rs
use std::path::Path;

use super::types::AppConfig;

const CONFIG_FILE: &str = "brltool.toml";

/// Load `brltool.toml` from the working directory when present, then apply
/// environment overrides.
pub fn load_default() -> anyhow::Result<AppConfig> {
    let mut cfg = load_path(Path::new(CONFIG_FILE))?;

    if let Ok(v) = std::env::var("BRLTOOL_LOG") {
        if !v.trim().is_empty() {
            cfg.logging.level = v;
        }
    }

    Ok(cfg)
}

fn load_path(path: &Path) -> anyhow::Result<AppConfig> {
    if path.exists() {
        let s = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<AppConfig>(&s)?)
    } else {
        Ok(AppConfig::default())
    }
}
