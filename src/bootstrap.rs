//! The built-in `init` and `refresh` commands.
//!
//! `init` writes a starter configuration fragment and template into the configuration
//! root through the regular tree processor, then runs `refresh`. `refresh` merges every
//! discovered fragment into the configuration index the generator reads.

use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::config::{find_config, Configuration};
use crate::constants::{CONFIG_FILES, CONFIG_INDEX, TEMPLATES_DIR};
use crate::context::Vars;
use crate::error::{Error, Result};
use crate::fs::LocalFileSystem;
use crate::plugins::{merge_plugins, FragmentDiscovery, PluginDiscovery};
use crate::processor::{FileOperation, Processor};
use crate::prompt::Prompter;
use crate::renderer::MiniJinjaRenderer;
use crate::store::EmbeddedTemplateStore;
use crate::tree::TreeNode;

static STARTER_TEMPLATES: &[(&str, &str)] = &[
    ("index.js.hbs", include_str!("../starter/index.js.hbs")),
    ("module.config.yaml", include_str!("../starter/module.config.yaml")),
];

/// The starter files `init` creates inside the configuration root.
pub fn starter_tree() -> TreeNode {
    TreeNode::dir([
        (TEMPLATES_DIR, TreeNode::dir([("index.js.hbs", TreeNode::file("index.js.hbs"))])),
        ("module.config.yaml", TreeNode::file("module.config.yaml")),
    ])
}

/// Outcome of a `refresh`.
#[derive(Debug)]
pub struct RefreshSummary {
    pub index_path: PathBuf,
    pub plugins: Vec<String>,
    pub commands: Configuration,
}

/// Rebuilds the configuration index of `base_dir` from the plugins `discovery` finds.
///
/// # Errors
/// * `Error::ConfigError` if no plugin is found
pub fn refresh(base_dir: &Path, discovery: &dyn PluginDiscovery) -> Result<RefreshSummary> {
    let plugins = discovery.discover()?;
    if plugins.is_empty() {
        return Err(Error::ConfigError(format!(
            "No configuration fragments (*.config.yaml) found in '{}'",
            base_dir.display()
        )));
    }

    let plugin_names: Vec<String> = plugins.keys().cloned().collect();
    let commands = merge_plugins(plugins);

    let index_path = base_dir.join(CONFIG_INDEX);
    if let Some(existing) = find_config(base_dir, &CONFIG_FILES) {
        if existing != index_path {
            warn!(
                "{} takes precedence over the refreshed {}",
                existing.display(),
                index_path.display()
            );
        }
    }

    let header = format!("# Generated by 'ggen refresh' from: {}\n", plugin_names.join(", "));
    let body = serde_yaml::to_string(&commands)?;
    std::fs::write(&index_path, header + &body)?;

    info!(
        "Refreshed {} with {} command(s) from {} plugin(s)",
        index_path.display(),
        commands.len(),
        plugin_names.len()
    );

    Ok(RefreshSummary { index_path, plugins: plugin_names, commands })
}

/// Bootstraps a configuration root with the starter files and refreshes it.
///
/// Asks before overwriting an initialised root unless `force` is set.
///
/// # Returns
/// * `Result<bool>` - `false` if the user declined and nothing was written
pub fn init(base_dir: &Path, prompt: &dyn Prompter, force: bool) -> Result<bool> {
    if find_config(base_dir, &CONFIG_FILES).is_some() {
        let overwrite = prompt.confirm(
            force,
            format!("'{}' is already initialised. Overwrite the starter files?", base_dir.display()),
        )?;
        if !overwrite {
            info!("Leaving {} untouched", base_dir.display());
            return Ok(false);
        }
    }

    std::fs::create_dir_all(base_dir)?;

    let engine = MiniJinjaRenderer::new();
    let store = EmbeddedTemplateStore::new(STARTER_TEMPLATES);
    let fs = LocalFileSystem::new();
    let vars = Vars::new();
    let processor = Processor::new(&engine, &store, &fs, &vars);

    for operation in processor.process(&starter_tree(), base_dir)? {
        if let FileOperation::Write { target } = operation {
            println!("created: '{}'", target.display());
        }
    }

    refresh(base_dir, &FragmentDiscovery::new(base_dir))?;
    Ok(true)
}
