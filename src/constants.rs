//! Common constants used throughout ggen.

/// Supported configuration index file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["config.json", "config.yml", "config.yaml"];

/// File name `refresh` writes the merged configuration to
pub const CONFIG_INDEX: &str = "config.yaml";

/// Suffix marker of configuration fragments, e.g. `module.config.yaml`
pub const FRAGMENT_MARKER: &str = ".config.";

/// Glob matching configuration fragment file names
pub const FRAGMENT_GLOB: &str = "*.config.{json,yml,yaml}";

/// Default configuration root, relative to the working directory
pub const DEFAULT_BASE_DIR: &str = ".gen";

/// Templates directory inside the configuration root
pub const TEMPLATES_DIR: &str = "templates";

/// Environment variable overriding the configuration root
pub const BASE_PATH_ENV: &str = "GEN_PATH";
