//! Configuration handling for ggen.
//! Loads the command definitions of a configuration root (`.gen` by default)
//! from JSON or YAML.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::binder::ParamSchema;
use crate::constants::{CONFIG_FILES, DEFAULT_BASE_DIR, TEMPLATES_DIR};
use crate::error::{Error, Result};
use crate::tree::TreeNode;
use crate::types::ParamType;

/// A parameter declaration as written in a configuration file: either a type name or a
/// full type description.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ParamDecl {
    Name(String),
    Typed(ParamType),
}

/// A command as written in a configuration file, before parameter types are resolved.
#[derive(Debug, Deserialize)]
pub struct RawCommand {
    #[serde(default)]
    pub params: IndexMap<String, ParamDecl>,
    pub tree: TreeNode,
}

/// A named generation recipe: the parameters it accepts and the tree it creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCommand")]
pub struct CommandDefinition {
    pub params: ParamSchema,
    pub tree: TreeNode,
}

impl TryFrom<RawCommand> for CommandDefinition {
    type Error = String;

    fn try_from(raw: RawCommand) -> std::result::Result<Self, Self::Error> {
        let mut params = ParamSchema::new();
        for (name, decl) in raw.params {
            let param_type = match decl {
                ParamDecl::Name(type_name) => ParamType::from_name(&type_name)
                    .ok_or_else(|| format!("unknown type '{type_name}' for parameter '{name}'"))?,
                ParamDecl::Typed(param_type) => param_type,
            };
            if param_type.separators().iter().any(|separator| separator.is_empty()) {
                return Err(format!("parameter '{name}' declares an empty separator"));
            }
            params.insert(name, param_type);
        }

        Ok(Self { params, tree: raw.tree })
    }
}

/// Command name to definition.
pub type Configuration = IndexMap<String, CommandDefinition>;

/// A loaded configuration root.
#[derive(Debug)]
pub struct GenConfig {
    pub commands: Configuration,
    /// Directory template identifiers are resolved against
    pub templates_path: PathBuf,
}

/// Returns the configuration root: `explicit` when given, `./.gen` otherwise.
pub fn get_base_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(std::env::current_dir()?.join(DEFAULT_BASE_DIR)),
    }
}

/// Finds the first existing configuration file among `config_files` in `base_dir`.
pub fn find_config<P: AsRef<Path>>(base_dir: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files
        .iter()
        .map(|file| base_dir.as_ref().join(file))
        .find(|path| path.exists())
}

/// Loads configuration text from a configuration root, trying multiple file names.
///
/// # Errors
/// * `Error::ConfigError` if no configuration file exists
pub fn load_config<P: AsRef<Path>>(base_dir: P, config_files: &[&str]) -> Result<String> {
    let base_dir = base_dir.as_ref();
    match find_config(base_dir, config_files) {
        Some(config_path) => {
            debug!("Loading configuration from {}", config_path.display());
            Ok(std::fs::read_to_string(&config_path)?)
        }
        None => Err(Error::ConfigError(format!(
            "No configuration file found in '{}' (tried: {}). Run 'ggen init' or 'ggen refresh'",
            base_dir.display(),
            config_files.join(", ")
        ))),
    }
}

/// Parses configuration content, as JSON first and YAML otherwise.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither a valid JSON nor a valid YAML configuration
pub fn parse_config(content: &str) -> Result<Configuration> {
    if content.trim().is_empty() {
        return Ok(Configuration::new());
    }

    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads and parses the configuration of `base_dir`.
pub fn get_config<P: AsRef<Path>>(base_dir: P) -> Result<GenConfig> {
    let base_dir = base_dir.as_ref();
    let content = load_config(base_dir, &CONFIG_FILES)?;
    let commands = parse_config(&content)?;
    debug!("Loaded {} command(s)", commands.len());

    Ok(GenConfig { commands, templates_path: base_dir.join(TEMPLATES_DIR) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_and_typed_params() {
        let config = parse_config(
            r#"
module:
  params:
    name: string
    tags: { type: array, separator: "|" }
    meta: { type: map }
  tree: {}
"#,
        )
        .unwrap();

        let params = &config["module"].params;
        assert_eq!(params["name"], ParamType::String);
        assert_eq!(params["tags"], ParamType::array("|"));
        assert_eq!(params["meta"], ParamType::map(",", ":"));
    }

    #[test]
    fn test_empty_separator_rejected() {
        let result = parse_config(r#"{"m": {"params": {"t": {"type": "array", "separator": ""}}, "tree": {}}}"#);
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
