use ggen::binder::{get_vars, ParamSchema};
use ggen::types::{ParamType, ParamValue};

fn schema(params: &[(&str, ParamType)]) -> ParamSchema {
    params.iter().map(|(name, param_type)| (name.to_string(), param_type.clone())).collect()
}

fn string(value: &str) -> ParamValue {
    ParamValue::String(value.to_string())
}

#[test]
fn test_long_option() {
    let params = schema(&[("module_name", ParamType::String)]);
    let vars = get_vars(&params, &["--module_name", "test"]);

    assert_eq!(vars.get("module_name"), Some(&string("test")));
    assert_eq!(vars.len(), 1);
}

#[test]
fn test_inline_and_short_forms() {
    let params = schema(&[("name", ParamType::String), ("count", ParamType::Number)]);

    let vars = get_vars(&params, &["--name=Widget", "-c", "3"]);
    assert_eq!(vars.get("name"), Some(&string("Widget")));
    assert_eq!(vars.get("count"), Some(&ParamValue::Number(3.0)));

    let vars = get_vars(&params, &["-n=Gadget", "--count=-2"]);
    assert_eq!(vars.get("name"), Some(&string("Gadget")));
    assert_eq!(vars.get("count"), Some(&ParamValue::Number(-2.0)));
}

#[test]
fn test_negative_number_is_a_value() {
    let params = schema(&[("offset", ParamType::Number)]);
    let vars = get_vars(&params, &["--offset", "-5"]);

    assert_eq!(vars.get("offset"), Some(&ParamValue::Number(-5.0)));
}

#[test]
fn test_missing_parameters_are_omitted() {
    let params = schema(&[("name", ParamType::String), ("tags", ParamType::array(","))]);
    let vars = get_vars(&params, &["--name", "Widget"]);

    assert!(vars.contains("name"));
    assert!(!vars.contains("tags"));
}

#[test]
fn test_unknown_tokens_are_ignored() {
    let params = schema(&[("name", ParamType::String)]);
    let vars = get_vars(&params, &["stray", "--other", "x", "-zz", "--name", "Widget", "--"]);

    assert_eq!(vars.len(), 1);
    assert_eq!(vars.get("name"), Some(&string("Widget")));
}

#[test]
fn test_option_without_value() {
    let params = schema(&[("name", ParamType::String), ("count", ParamType::Number)]);
    let vars = get_vars(&params, &["--name", "--count"]);

    assert_eq!(vars.get("name"), Some(&string("")));
    match vars.get("count") {
        Some(ParamValue::Number(n)) => assert!(n.is_nan()),
        other => panic!("Expected NaN number, got {other:?}"),
    }
}

#[test]
fn test_boolean_flags() {
    let params = schema(&[
        ("tests", ParamType::Boolean),
        ("docs", ParamType::Boolean),
        ("lint", ParamType::Boolean),
        ("name", ParamType::String),
    ]);
    let vars = get_vars(&params, &["--tests", "--docs", "false", "--lint=no", "--name", "x"]);

    assert_eq!(vars.get("tests"), Some(&ParamValue::Boolean(true)));
    assert_eq!(vars.get("docs"), Some(&ParamValue::Boolean(false)));
    assert_eq!(vars.get("lint"), Some(&ParamValue::Boolean(true)));
    assert_eq!(vars.get("name"), Some(&string("x")));
}

#[test]
fn test_boolean_flag_does_not_consume_positionals() {
    let params = schema(&[("tests", ParamType::Boolean)]);
    let vars = get_vars(&params, &["-t", "extra"]);

    assert_eq!(vars.get("tests"), Some(&ParamValue::Boolean(true)));
}

#[test]
fn test_last_occurrence_wins() {
    let params = schema(&[("name", ParamType::String)]);
    let vars = get_vars(&params, &["--name", "first", "-n", "second"]);

    assert_eq!(vars.get("name"), Some(&string("second")));
}

#[test]
fn test_alias_collision_last_declared_wins() {
    let params = schema(&[("name", ParamType::String), ("namespace", ParamType::String)]);
    let vars = get_vars(&params, &["-n", "core"]);

    assert_eq!(vars.get("namespace"), Some(&string("core")));
    assert!(!vars.contains("name"));
}

#[test]
fn test_vars_follow_declaration_order() {
    let params = schema(&[("b", ParamType::String), ("a", ParamType::String)]);
    let vars = get_vars(&params, &["--a", "1", "--b", "2"]);

    let names: Vec<&str> = vars.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["b", "a"]);
}

#[test]
fn test_composite_values() {
    let params = schema(&[("tags", ParamType::array(",")), ("meta", ParamType::map(",", ":"))]);
    let vars = get_vars(&params, &["--tags", "\"a, b\"", "--meta", "k:v"]);

    assert_eq!(
        vars.get("tags"),
        Some(&ParamValue::Array(vec!["a".to_string(), "b".to_string()]))
    );
    match vars.get("meta") {
        Some(ParamValue::Map(map)) => assert_eq!(map["k"], Some("v".to_string())),
        other => panic!("Expected Map value, got {other:?}"),
    }
}
