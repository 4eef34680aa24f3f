use ggen::cli::{Args, Command};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("ggen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_init_args() {
    let parsed = Args::try_parse_from(make_args(&["init"])).unwrap();
    assert_eq!(parsed.command, Command::Init { force: false });
    assert!(!parsed.verbose);

    let parsed = Args::try_parse_from(make_args(&["init", "-f"])).unwrap();
    assert_eq!(parsed.command, Command::Init { force: true });
}

#[test]
fn test_refresh_args() {
    let parsed = Args::try_parse_from(make_args(&["-v", "refresh"])).unwrap();

    assert_eq!(parsed.command, Command::Refresh);
    assert!(parsed.verbose);
}

#[test]
fn test_user_command_tokens_are_passed_through() {
    let parsed = Args::try_parse_from(make_args(&[
        "--gen-path",
        "./config",
        "module",
        "--module_name",
        "auth",
        "-t",
    ]))
    .unwrap();

    assert_eq!(parsed.gen_path, Some(PathBuf::from("./config")));
    assert_eq!(
        parsed.command,
        Command::Run(vec![
            "module".to_string(),
            "--module_name".to_string(),
            "auth".to_string(),
            "-t".to_string(),
        ])
    );
}

#[test]
fn test_missing_command() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}
