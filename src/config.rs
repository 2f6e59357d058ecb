use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Figure rendering settings, loaded from a TOML file next to the binary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Directory all PNG output is written into.
    #[serde(default = "RenderConfig::default_out_dir")]
    pub out_dir: String,
    /// Heatmap cell edge in pixels.
    #[serde(default = "RenderConfig::default_cell_px")]
    pub cell_px: u32,
    /// Strip-figure cell edge in pixels.
    #[serde(default = "RenderConfig::default_strip_cell_px")]
    pub strip_cell_px: u32,
    /// Write the value of each heatmap cell over its color.
    #[serde(default = "RenderConfig::default_annotate")]
    pub annotate: bool,
}

impl RenderConfig {
    fn default_out_dir() -> String {
        "target/plots".to_string()
    }
    fn default_cell_px() -> u32 {
        48
    }
    fn default_strip_cell_px() -> u32 {
        28
    }
    fn default_annotate() -> bool {
        true
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, text) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                eprintln!("Failed to serialize default config: {err}");
            }
        }
        default_cfg
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            out_dir: Self::default_out_dir(),
            cell_px: Self::default_cell_px(),
            strip_cell_px: Self::default_strip_cell_px(),
            annotate: Self::default_annotate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "tonewheel_config_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    #[test]
    fn load_or_default_writes_then_rereads_defaults() {
        let path = unique_path("defaults.toml");
        let path_str = path.to_string_lossy().to_string();

        let first = RenderConfig::load_or_default(&path_str);
        assert_eq!(first, RenderConfig::default());
        assert!(path.exists());

        let second = RenderConfig::load_or_default(&path_str);
        assert_eq!(second, first);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_or_default_reads_partial_file() {
        let path = unique_path("partial.toml");
        let path_str = path.to_string_lossy().to_string();
        fs::write(&path, "cell_px = 64\n").unwrap();

        let cfg = RenderConfig::load_or_default(&path_str);
        assert_eq!(cfg.cell_px, 64);
        assert_eq!(cfg.out_dir, RenderConfig::default_out_dir());

        let _ = fs::remove_file(&path);
    }
}
