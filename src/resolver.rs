//! Picks the command to run out of the configuration.

use log::info;

use crate::binder::get_vars;
use crate::config::Configuration;
use crate::context::Vars;
use crate::error::{Error, Result};
use crate::tree::TreeNode;

/// A command ready to be generated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCommand<'a> {
    pub name: String,
    pub tree: &'a TreeNode,
    pub vars: Vars,
}

/// Resolves `argv` against `config`.
///
/// The first token that is not an option names the command; all other tokens are
/// bound to that command's parameters.
///
/// # Errors
/// * `Error::MissingCommand` if `argv` has no positional token
/// * `Error::CommandNotFound` if the configuration has no such command
pub fn pick_command<'a, S: AsRef<str>>(
    config: &'a Configuration,
    argv: &[S],
) -> Result<ResolvedCommand<'a>> {
    let position = argv
        .iter()
        .position(|token| !token.as_ref().starts_with('-'))
        .ok_or(Error::MissingCommand)?;
    let command = argv[position].as_ref();

    let definition = config
        .get(command)
        .ok_or_else(|| Error::CommandNotFound { command: command.to_string() })?;

    let rest: Vec<&str> = argv
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != position)
        .map(|(_, token)| token.as_ref())
        .collect();
    let vars = get_vars(&definition.params, &rest);

    info!("Generating a {} with {}", command, vars.to_json());

    Ok(ResolvedCommand { name: command.to_string(), tree: &definition.tree, vars })
}
