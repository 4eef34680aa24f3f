use std::fs;

use ggen::config::{get_base_path, get_config, load_config, parse_config};
use ggen::constants::{CONFIG_FILES, DEFAULT_BASE_DIR};
use ggen::error::Error;
use ggen::tree::TreeNode;
use ggen::types::ParamType;
use tempfile::TempDir;

const YAML_CONFIG: &str = r#"
module:
  params:
    module_name: string
  tree:
    "{{ module_name }}":
      "index.js": "index.js.hbs"
"#;

#[test]
fn test_get_config_from_yaml() {
    let base = TempDir::new().unwrap();
    fs::write(base.path().join("config.yaml"), YAML_CONFIG).unwrap();

    let config = get_config(base.path()).unwrap();

    assert_eq!(config.templates_path, base.path().join("templates"));
    let module = &config.commands["module"];
    assert_eq!(module.params["module_name"], ParamType::String);
    assert_eq!(
        module.tree,
        TreeNode::dir([(
            "{{ module_name }}",
            TreeNode::dir([("index.js", TreeNode::file("index.js.hbs"))])
        )])
    );
}

#[test]
fn test_json_config_takes_precedence() {
    let base = TempDir::new().unwrap();
    fs::write(base.path().join("config.yaml"), YAML_CONFIG).unwrap();
    fs::write(
        base.path().join("config.json"),
        r#"{"page": {"params": {"title": "string"}, "tree": {"index.html": "page.hbs"}}}"#,
    )
    .unwrap();

    let config = get_config(base.path()).unwrap();

    assert!(config.commands.contains_key("page"));
    assert!(!config.commands.contains_key("module"));
}

#[test]
fn test_missing_config_file() {
    let base = TempDir::new().unwrap();

    match load_config(base.path(), &CONFIG_FILES) {
        Err(Error::ConfigError(message)) => {
            assert!(message.contains("No configuration file found"));
            assert!(message.contains("ggen init"));
        }
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_commands_keep_declaration_order() {
    let config = parse_config(
        r#"
zeta: { tree: {} }
alpha: { tree: {} }
"#,
    )
    .unwrap();

    let names: Vec<&str> = config.keys().map(String::as_str).collect();
    assert_eq!(names, ["zeta", "alpha"]);
    assert!(config["zeta"].params.is_empty());
}

#[test]
fn test_unknown_param_type() {
    let result = parse_config(
        r#"
module:
  params:
    when: date
  tree: {}
"#,
    );

    match result {
        Err(Error::ConfigError(message)) => assert!(message.contains("date")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_missing_tree_is_invalid() {
    assert!(matches!(
        parse_config("module:\n  params: {}\n"),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn test_empty_config() {
    assert!(parse_config("  \n").unwrap().is_empty());
}

#[test]
fn test_get_base_path() {
    let explicit = TempDir::new().unwrap();
    assert_eq!(get_base_path(Some(explicit.path())).unwrap(), explicit.path());

    let default = get_base_path(None).unwrap();
    assert_eq!(default, std::env::current_dir().unwrap().join(DEFAULT_BASE_DIR));
}
