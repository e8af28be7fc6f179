//! CLI entry point and command handlers for checkblock.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use checkblock::ui;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var(ui::QUIET_ENV, "1");
    }

    match cli.command {
        Commands::Init { force } => cmd::init::cmd_init(force),
        Commands::Validate {
            path,
            document,
            persist,
        } => cmd::block::cmd_validate(path, document, persist),
        Commands::Save {
            name,
            path,
            document,
        } => {
            let repo = cmd::open_repository()?;
            cmd::block::cmd_save(&repo, &name, path, document)
        }
        Commands::Show { name } => cmd::block::cmd_show(&cmd::open_repository()?, &name),
        Commands::List => cmd::block::cmd_list(&cmd::open_repository()?),
        Commands::Persist { name } => cmd::block::cmd_persist(&cmd::open_repository()?, &name),
        Commands::Delete { name } => cmd::block::cmd_delete(&cmd::open_repository()?, &name),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
    }
}
