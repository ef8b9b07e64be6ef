// src/bin/repo-scaffold.rs
//! repo-scaffold CLI binary.

#![deny(missing_docs)]

use clap::Parser;
use colored::Colorize;

use repo_scaffold::cli;
use repo_scaffold::config::Config;
use repo_scaffold::error::{ScaffoldError, ScaffoldResult};
use repo_scaffold::logging;
use repo_scaffold::prompt::TerminalPrompter;
use repo_scaffold::registry::TemplateRegistry;
use repo_scaffold::shell::SystemShell;
use repo_scaffold::workflow::Workflow;

fn main() -> ScaffoldResult<()> {
    let args = cli::Cli::parse();
    logging::init(args.verbose, args.quiet);

    let invocation = args.invocation();
    if invocation.help {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    let config = Config::load_or_default(args.config.as_deref())?;
    let registry = TemplateRegistry::from_config(&config);
    let cwd = std::env::current_dir()?;

    let workflow = Workflow::new(cwd, &config, &registry, &TerminalPrompter, &SystemShell);
    if let Err(err) = workflow.run(&invocation) {
        println!("{}", format!("{err:#}").red());
        // Only a non-empty target directory changes the exit status.
        let code = err
            .downcast_ref::<ScaffoldError>()
            .map_or(0, ScaffoldError::exit_code);
        if code != 0 {
            std::process::exit(code);
        }
    }
    Ok(())
}
