//! ggen generates files and directories from user-defined commands.
//! A command pairs typed command-line parameters with a tree of directory names and
//! templates; running it renders that tree into the current directory.

/// Typed binding of command-line tokens to command parameters
pub mod binder;

/// Built-in `init` and `refresh` commands
pub mod bootstrap;

/// Command-line interface module for the ggen application
pub mod cli;

/// Configuration handling
/// Supports JSON and YAML formats (config.json, config.yml, config.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Variable context passed to templates
pub mod context;

/// Error types and handling for the ggen application
pub mod error;

/// Filesystem abstraction used by the tree processor
pub mod fs;

/// Logger initialisation
pub mod logger;

/// Configuration fragment discovery and merging
pub mod plugins;

/// Tree processing
/// Creates directories and renders files described by a command's tree
pub mod processor;

/// User confirmation prompts
pub mod prompt;

/// Template rendering with MiniJinja
pub mod renderer;

/// Command lookup
pub mod resolver;

/// Template lookup by identifier
pub mod store;

/// Generation tree model
pub mod tree;

/// Parameter types and their parsers
pub mod types;
