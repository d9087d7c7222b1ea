use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arbor", version, about = "Worktree workflow manager")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a project root with a primary worktree and trees container
    #[command(
        visible_alias = "i",
        long_about = "Initialize a project root: a git-initialized primary worktree, an empty \
            trees container, the marker file, and the shared-path configuration file.\n\
            Prints the primary worktree path for `cd \"$(arbor init …)\"`.",
        after_help = "Examples:\n  arbor init\n  arbor init ~/work/myproject\n  arbor init --no-cd"
    )]
    Init {
        /// Directory to initialize (default: current directory)
        path: Option<PathBuf>,
        /// Do not print the navigation path
        #[arg(long)]
        no_cd: bool,
    },
    /// Start a feature worktree on a new branch
    #[command(
        visible_alias = "s",
        long_about = "Create a new branch and a worktree for it under the trees container.\n\
            The branch must not already exist. The source defaults to the current branch, \
            then to the trunk. With two arguments, the first is a custom worktree path \
            (resolved against the current directory) and the second the branch name.\n\
            Shared paths from the primary worktree are symlinked into the new worktree.",
        after_help = "Examples:\n  arbor start feat/login\n  arbor start -s develop feat/login\n  arbor start ../elsewhere feat/login"
    )]
    Start {
        /// Branch to create, optionally preceded by a custom worktree path
        #[arg(required = true, num_args = 1..=2)]
        args: Vec<String>,
        /// Source branch or ref to start from
        #[arg(short = 's', long = "source")]
        source: Option<String>,
        /// Do not print the navigation path
        #[arg(long)]
        no_cd: bool,
    },
    /// Start a feature worktree without navigating to it
    #[command(
        visible_alias = "c",
        after_help = "Examples:\n  arbor create feat/login\n  arbor create -s develop feat/login"
    )]
    Create {
        /// Branch to create, optionally preceded by a custom worktree path
        #[arg(required = true, num_args = 1..=2)]
        args: Vec<String>,
        /// Source branch or ref to start from
        #[arg(short = 's', long = "source")]
        source: Option<String>,
    },
    /// Pick an existing feature worktree and print its path
    #[command(
        visible_alias = "r",
        long_about = "Resolve a feature worktree by substring filter on branch name or path.\n\
            A single match is taken directly; several open a numbered menu.",
        after_help = "Examples:\n  arbor resume\n  arbor resume login\n  cd \"$(arbor resume login)\""
    )]
    Resume {
        /// Substring filter on branch name or path
        filter: Option<String>,
    },
    /// Print the primary worktree path
    #[command(
        visible_alias = "b",
        after_help = "Examples:\n  cd \"$(arbor back)\""
    )]
    Back,
    /// Push a branch, remove its worktree, and clean up
    #[command(
        visible_alias = "f",
        long_about = "Finish a feature worktree: push its branch, optionally open a PR, remove \
            the worktree, and delete the branch when its PR is merged.\n\
            Defaults to the current branch; refuses to finish the primary worktree.\n\
            Uncommitted changes stop the operation unless --force is given.",
        after_help = "Examples:\n  arbor finish\n  arbor finish feat/login --pr\n  arbor finish feat/login --no-push --rm"
    )]
    Finish {
        /// Branch whose worktree to finish (default: current branch)
        branch: Option<String>,
        /// Open a pull request after pushing
        #[arg(long)]
        pr: bool,
        /// Never delete the local branch
        #[arg(long)]
        keep_branch: bool,
        /// Skip the push (and any remote branch deletion)
        #[arg(long)]
        no_push: bool,
        /// Always delete the local branch
        #[arg(long = "rm", conflicts_with = "keep_branch")]
        remove_branch: bool,
        /// Proceed despite uncommitted changes
        #[arg(long)]
        force: bool,
    },
    /// Pick a feature worktree interactively and finish it
    #[command(
        visible_alias = "d",
        after_help = "Examples:\n  arbor delete\n  arbor delete login --keep-branch"
    )]
    Delete {
        /// Substring filter on branch name or path
        filter: Option<String>,
        /// Open a pull request after pushing
        #[arg(long)]
        pr: bool,
        /// Never delete the local branch
        #[arg(long)]
        keep_branch: bool,
        /// Skip the push (and any remote branch deletion)
        #[arg(long)]
        no_push: bool,
        /// Always delete the local branch
        #[arg(long = "rm", conflicts_with = "keep_branch")]
        remove_branch: bool,
        /// Proceed despite uncommitted changes
        #[arg(long)]
        force: bool,
    },
    /// Drop a feature worktree without pushing
    #[command(
        visible_alias = "x",
        long_about = "Remove a feature worktree without pushing anything. Uncommitted changes \
            only ask for confirmation. The branch is kept unless --delete-branch is given; \
            an unmerged branch asks for confirmation before a forced delete.",
        after_help = "Examples:\n  arbor cancel\n  arbor cancel feat/spike --delete-branch"
    )]
    Cancel {
        /// Branch whose worktree to cancel (default: current branch)
        branch: Option<String>,
        /// Also delete the local branch
        #[arg(long)]
        delete_branch: bool,
    },
    /// List worktrees
    #[command(
        visible_alias = "ls",
        after_help = "Examples:\n  arbor list\n  arbor list --json"
    )]
    List {
        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
    /// Show the current worktree's branch and pending changes
    #[command(visible_alias = "st")]
    Status,
    /// Clean up stale worktree metadata
    #[command(visible_alias = "p")]
    Prune,
    /// Fetch and fast-forward the primary worktree
    #[command(visible_alias = "sy")]
    Sync,
    /// Generate shell completions
    #[command(
        long_about = "Generate shell completion scripts.\n\
            Add to your shell configuration to enable tab completion.",
        after_help = "Examples:\n  eval \"$(arbor completions zsh)\"\n  arbor completions fish | source"
    )]
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// Flags shared by `finish` and `delete`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinishFlags {
    pub pr: bool,
    pub keep_branch: bool,
    pub no_push: bool,
    pub remove_branch: bool,
    pub force: bool,
}
