//! Discovery of configuration fragments ("plugins") and their merging into one configuration.

use globset::Glob;
use indexmap::IndexMap;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{parse_config, Configuration};
use crate::constants::{FRAGMENT_GLOB, FRAGMENT_MARKER};
use crate::error::{Error, Result};

/// Trait for sources of command definitions.
pub trait PluginDiscovery {
    /// Returns plugin name to the commands it defines, in a stable order.
    fn discover(&self) -> Result<IndexMap<String, Configuration>>;
}

/// Discovers `<name>.config.{json,yml,yaml}` fragment files at the top of a
/// configuration root.
pub struct FragmentDiscovery {
    base_dir: PathBuf,
}

impl FragmentDiscovery {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self { base_dir: base_dir.into() }
    }
}

/// Plugin name of a fragment file name: `module.config.yaml` is `module`.
pub fn plugin_name(file_name: &str) -> Option<&str> {
    file_name.split_once(FRAGMENT_MARKER).map(|(name, _)| name).filter(|name| !name.is_empty())
}

impl PluginDiscovery for FragmentDiscovery {
    /// # Errors
    /// * `Error::IoError` if the configuration root cannot be read
    /// * `Error::ConfigError` if a fragment does not parse
    fn discover(&self) -> Result<IndexMap<String, Configuration>> {
        let matcher = Glob::new(FRAGMENT_GLOB)
            .map_err(|e| Error::ConfigError(e.to_string()))?
            .compile_matcher();

        let mut plugins = IndexMap::new();
        for entry in WalkDir::new(&self.base_dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            if !matcher.is_match(file_name) {
                continue;
            }
            let Some(name) = plugin_name(file_name) else {
                continue;
            };

            debug!("Found configuration fragment {}", entry.path().display());
            plugins.insert(name.to_string(), load_fragment(entry.path())?);
        }

        Ok(plugins)
    }
}

fn load_fragment(path: &Path) -> Result<Configuration> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
        .map_err(|e| Error::ConfigError(format!("Invalid fragment '{}': {e}", path.display())))
}

/// Merges plugin configurations in order. A command defined by several plugins is
/// taken from the last one.
pub fn merge_plugins(plugins: IndexMap<String, Configuration>) -> Configuration {
    let mut merged = Configuration::new();
    let mut owners: IndexMap<String, String> = IndexMap::new();

    for (plugin, commands) in plugins {
        for (command, definition) in commands {
            if let Some(previous) = owners.insert(command.clone(), plugin.clone()) {
                warn!("Command '{command}' from plugin '{previous}' is overridden by plugin '{plugin}'");
            }
            merged.insert(command, definition);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_name() {
        assert_eq!(plugin_name("module.config.yaml"), Some("module"));
        assert_eq!(plugin_name("react.component.config.json"), Some("react.component"));
        assert_eq!(plugin_name(".config.yaml"), None);
        assert_eq!(plugin_name("config.yaml"), None);
    }
}
