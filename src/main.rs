mod cli;
mod commands;
mod config;
mod gh;
mod git;
mod project;
mod select;
mod shared;
mod terminal;
mod worktree;

use clap::Parser;
use cli::{Cli, Command, FinishFlags};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Init { path, no_cd } => commands::init::run(path.as_deref(), no_cd),
        Command::Start {
            args,
            source,
            no_cd,
        } => commands::start::run(&args, source.as_deref(), no_cd),
        Command::Create { args, source } => commands::start::run(&args, source.as_deref(), true),
        Command::Resume { filter } => commands::resume::run(filter.as_deref()),
        Command::Back => commands::back::run(),
        Command::Finish {
            branch,
            pr,
            keep_branch,
            no_push,
            remove_branch,
            force,
        } => commands::finish::run(
            branch.as_deref(),
            FinishFlags {
                pr,
                keep_branch,
                no_push,
                remove_branch,
                force,
            },
        ),
        Command::Delete {
            filter,
            pr,
            keep_branch,
            no_push,
            remove_branch,
            force,
        } => commands::delete::run(
            filter.as_deref(),
            FinishFlags {
                pr,
                keep_branch,
                no_push,
                remove_branch,
                force,
            },
        ),
        Command::Cancel {
            branch,
            delete_branch,
        } => commands::cancel::run(branch.as_deref(), delete_branch),
        Command::List { json } => commands::list::run(json),
        Command::Status => commands::status::run(),
        Command::Prune => commands::prune::run(),
        Command::Sync => commands::sync::run(),
        Command::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        eprintln!("arbor: {e}");
        process::exit(1);
    }
}
