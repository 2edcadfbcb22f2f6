//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/maptree/maptree.toml`
//! 3. Local config: file given with `--config`
//! 4. Environment variables: `MAPTREE_*` prefix, `__` between sections
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, DEFAULT_MAX_PHRASES};
use crate::domain::DEFAULT_LEAF_COUNT;
use crate::render::RenderStyle;

/// Upper bound for the leaf count; the diagram is unreadable long before.
pub const MAX_NODE_COUNT: usize = 4096;

/// Drawing surface dimensions used when rendering from the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasSettings {
    /// Client width in CSS pixels
    pub width: f64,
    /// Client height in CSS pixels
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            device_pixel_ratio: 1.0,
        }
    }
}

/// Unified configuration for maptree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Number of leaves in the synthesized tree
    pub node_count: usize,
    /// Maximum number of sampled phrases
    pub max_phrases: usize,
    /// Seed for reproducible trees; random when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Default SVG output file; stdout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub canvas: CanvasSettings,
    pub style: RenderStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_LEAF_COUNT,
            max_phrases: DEFAULT_MAX_PHRASES,
            seed: None,
            output: None,
            canvas: CanvasSettings::default(),
            style: RenderStyle::default(),
        }
    }
}

/// Get the XDG config directory for maptree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "maptree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("maptree.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// A missing global file is fine; a `local` file that does not exist is
    /// an error since the user asked for it explicitly.
    pub fn load(local: Option<&Path>) -> ApplicationResult<Self> {
        let defaults = Config::try_from(&Settings::default()).map_err(config_err)?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "Loading global config");
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(local_path) = local {
            if !local_path.exists() {
                return Err(ApplicationError::config(format!(
                    "config file not found: {}",
                    local_path.display()
                )));
            }
            debug!(path = %local_path.display(), "Loading local config");
            builder = builder.add_source(File::from(local_path.to_path_buf()).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("MAPTREE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.expand_paths();
        settings.validate()?;
        Ok(settings)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(output) = &self.output {
            self.output = Some(PathBuf::from(expand_path(&output.to_string_lossy())));
        }
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.node_count > MAX_NODE_COUNT {
            return Err(ApplicationError::config(format!(
                "node_count {} exceeds maximum of {}",
                self.node_count, MAX_NODE_COUNT
            )));
        }
        let canvas = &self.canvas;
        if !(canvas.width > 0.0 && canvas.height > 0.0) {
            return Err(ApplicationError::config(format!(
                "canvas size must be positive, got {}x{}",
                canvas.width, canvas.height
            )));
        }
        if !(canvas.device_pixel_ratio > 0.0) {
            return Err(ApplicationError::config(format!(
                "device_pixel_ratio must be positive, got {}",
                canvas.device_pixel_ratio
            )));
        }
        if self.style.min_box_width > self.style.max_box_width {
            return Err(ApplicationError::config(format!(
                "min_box_width {} is larger than max_box_width {}",
                self.style.min_box_width, self.style.max_box_width
            )));
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ApplicationError::config(format!("serialize config: {e}")))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# maptree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/maptree/maptree.toml
#   Local:  file passed with --config
#   Env:    MAPTREE_* environment variables, e.g. MAPTREE_CANVAS__WIDTH=1920
#   Flags:  command line options

# Number of leaves in the synthesized tree
# node_count = 10

# Maximum number of phrases sampled from the input
# max_phrases = 300

# Fixed seed for reproducible trees (random when unset)
# seed = 42

# Default SVG output file (stdout when unset)
# output = "~/maptree.svg"

[canvas]
# width = 1280.0
# height = 800.0
# device_pixel_ratio = 1.0

[style]
# padding = 20.0
# min_box_width = 110.0
# max_box_width = 220.0
# box_width_ratio = 0.16
# box_height = 34.0
# corner_radius = 8.0
# label_padding = 12.0
# line_height = 14.0
# font = { size = 12.0, family = "system-ui, -apple-system, Segoe UI, Roboto, Arial" }
# edge_color = { r = 30, g = 30, b = 30, a = 0.6 }
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::config(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load(None).expect("load defaults");
        assert_eq!(settings.node_count, 10);
        assert_eq!(settings.max_phrases, 300);
        assert_eq!(settings.style, RenderStyle::default());
    }

    #[test]
    fn given_local_file_when_loading_then_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "node_count = 5\nseed = 7\n[canvas]\nwidth = 640.0\n[style]\npadding = 10.0"
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).expect("load local");

        assert_eq!(settings.node_count, 5);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.canvas.width, 640.0);
        assert_eq!(settings.canvas.height, 800.0);
        assert_eq!(settings.style.padding, 10.0);
        assert_eq!(settings.style.box_height, 34.0);
    }

    #[test]
    fn given_missing_local_file_when_loading_then_errors() {
        let result = Settings::load(Some(Path::new("/nonexistent/maptree.toml")));
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_zero_pixel_ratio_when_validating_then_errors() {
        let mut settings = Settings::default();
        settings.canvas.device_pixel_ratio = 0.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn given_too_many_nodes_when_validating_then_errors() {
        let settings = Settings {
            node_count: MAX_NODE_COUNT + 1,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn given_defaults_when_serializing_then_toml_round_trips() {
        let toml_str = Settings::default().to_toml().unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn given_template_when_parsing_then_valid_toml() {
        let parsed: Settings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn given_tilde_in_output_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            output: Some(PathBuf::from("~/tree.svg")),
            ..Settings::default()
        };
        settings.expand_paths();
        let home = std::env::var("HOME").expect("HOME should be set");
        let output = settings.output.unwrap();
        assert!(output.to_string_lossy().starts_with(&home));
    }
}
