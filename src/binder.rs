//! Binds command-line tokens to a command's declared parameters.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::debug;

use crate::context::Vars;
use crate::types::ParamType;

/// Parameter name to type, in declaration order.
pub type ParamSchema = IndexMap<String, ParamType>;

/// Returns true for tokens that start a new option rather than carry a value.
/// Negative numbers are values.
fn looks_like_option(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && token.parse::<f64>().is_err()
}

/// Single-character aliases derived from the first character of each name.
/// On collisions the parameter declared last owns the alias.
fn aliases(params: &ParamSchema) -> HashMap<char, &str> {
    let mut aliases = HashMap::new();
    for name in params.keys() {
        if let Some(alias) = name.chars().next() {
            aliases.insert(alias, name.as_str());
        }
    }
    aliases
}

/// Builds the variable context for `params` out of `argv`.
///
/// Accepts `--name value`, `--name=value`, `-n value` and `-n=value`. Boolean
/// parameters may be bare flags. Parameters that do not appear in `argv` are left
/// out of the result, and tokens that match no parameter are ignored.
pub fn get_vars<S: AsRef<str>>(params: &ParamSchema, argv: &[S]) -> Vars {
    let aliases = aliases(params);
    let mut captured: HashMap<&str, Option<&str>> = HashMap::new();

    let mut index = 0;
    while index < argv.len() {
        let token = argv[index].as_ref();
        index += 1;

        let (name, inline) = if let Some(option) = token.strip_prefix("--") {
            let (key, inline) = match option.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (option, None),
            };
            (params.get_key_value(key).map(|(name, _)| name.as_str()), inline)
        } else if looks_like_option(token) {
            let option = &token[1..];
            let (alias, inline) = match option.split_once('=') {
                Some((alias, value)) => (alias, Some(value)),
                None => (option, None),
            };
            let mut chars = alias.chars();
            let name = match (chars.next(), chars.next()) {
                (Some(alias), None) => aliases.get(&alias).copied(),
                _ => None,
            };
            (name, inline)
        } else {
            debug!("Ignoring positional argument '{token}'");
            continue;
        };

        let Some(name) = name else {
            debug!("Ignoring unknown option '{token}'");
            continue;
        };
        let param_type = &params[name];

        let next = argv.get(index).map(AsRef::as_ref);
        let raw = match inline {
            Some(value) => Some(value),
            None if param_type.is_flag() => match next {
                Some(value @ ("true" | "false")) => {
                    index += 1;
                    Some(value)
                }
                _ => Some("true"),
            },
            None => match next {
                Some(value) if !looks_like_option(value) => {
                    index += 1;
                    Some(value)
                }
                _ => None,
            },
        };

        captured.insert(name, raw);
    }

    params
        .iter()
        .filter_map(|(name, param_type)| {
            captured.get(name.as_str()).map(|raw| (name.clone(), param_type.parse(*raw)))
        })
        .collect()
}
