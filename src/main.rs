//! ggen's main application entry point and orchestration logic.
//! Handles command-line argument parsing and dispatches to the built-in
//! commands or to the user-defined command generation flow.

use std::path::Path;

use ggen::{
    bootstrap::{init, refresh},
    cli::{get_args, Args, Command},
    config::{get_base_path, get_config},
    error::{default_error_handler, Result},
    fs::LocalFileSystem,
    logger::init_logger,
    plugins::FragmentDiscovery,
    processor::{FileOperation, Processor},
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    resolver::pick_command,
    store::DirTemplateStore,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the configuration root
/// 2. Runs `init`, `refresh`, or the user-defined command named by the first argument
fn run(args: Args) -> Result<()> {
    let base_dir = get_base_path(args.gen_path.as_deref())?;

    match args.command {
        Command::Init { force } => {
            let prompt = DialoguerPrompter::new();
            if init(&base_dir, &prompt, force)? {
                println!("Initialised {}.", base_dir.display());
            }
            Ok(())
        }
        Command::Refresh => {
            let summary = refresh(&base_dir, &FragmentDiscovery::new(&base_dir))?;
            println!(
                "Refreshed {} from plugins: {}.",
                summary.index_path.display(),
                summary.plugins.join(", ")
            );
            println!(
                "Commands: {}.",
                summary.commands.keys().cloned().collect::<Vec<_>>().join(", ")
            );
            Ok(())
        }
        Command::Run(argv) => generate(&base_dir, &argv),
    }
}

/// Resolves `argv` against the configuration of `base_dir` and renders the
/// command's tree into the current directory.
///
/// The command is resolved before anything is written.
fn generate(base_dir: &Path, argv: &[String]) -> Result<()> {
    let config = get_config(base_dir)?;
    let command = pick_command(&config.commands, argv)?;

    let engine = MiniJinjaRenderer::new();
    let store = DirTemplateStore::new(&config.templates_path);
    let fs = LocalFileSystem::new();
    let output_root = std::env::current_dir()?;

    let processor = Processor::new(&engine, &store, &fs, &command.vars);
    let operations = processor.process(command.tree, &output_root)?;

    let files = operations
        .iter()
        .filter(|operation| matches!(operation, FileOperation::Write { .. }))
        .count();
    println!(
        "Generated '{}' ({} file(s)) in {}.",
        command.name,
        files,
        output_root.display()
    );
    Ok(())
}
