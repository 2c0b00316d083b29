use clap::{Parser, Subcommand};
use ghedit::commands::*;
use ghedit::core::{error::Result, print_error, workspace::Workspace};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghedit")]
#[command(about = "Edit a GitHub repository locally and publish the changes as one commit")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change the repository and token
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Load the upstream tree of the configured branch
    Pull {
        /// Drop local changes
        #[arg(long)]
        force: bool,
    },
    /// List the working set
    Ls {
        /// Only entries with local changes
        #[arg(long)]
        dirty: bool,
    },
    /// Show the changes the next commit would publish
    Status,
    /// Print a file, fetching it if needed
    Show { path: String },
    /// Replace a file's content from a file or standard input
    Edit {
        path: String,
        /// Read the new content from this file
        #[arg(long)]
        from: Option<PathBuf>,
    },
    /// Create a file or directory
    New {
        path: String,
        /// Create a directory
        #[arg(long)]
        dir: bool,
        /// Initial content for the file
        #[arg(long, conflicts_with = "dir")]
        from: Option<PathBuf>,
    },
    /// Mark a file or directory for deletion
    Rm { path: String },
    /// Discard local changes
    Revert {
        #[arg(required_unless_present = "all")]
        paths: Vec<String>,
        /// Revert every changed entry
        #[arg(long, conflicts_with = "paths")]
        all: bool,
    },
    /// Set the focused item
    Focus { path: String },
    /// Reconcile loaded files with upstream
    Sync,
    /// Publish local changes as one commit
    Commit {
        #[arg(short, long)]
        message: String,
    },
}

async fn run(command: Commands) -> Result<()> {
    let open = Workspace::open;
    match command {
        Commands::Config { action } => execute_config(action),
        Commands::Pull { force } => execute_pull(&open()?, force).await,
        Commands::Ls { dirty } => execute_list(&open()?, dirty),
        Commands::Status => execute_status(&open()?),
        Commands::Show { path } => execute_show(&open()?, &path).await,
        Commands::Edit { path, from } => execute_edit(&open()?, &path, from.as_deref()).await,
        Commands::New { path, dir, from } => execute_new(&open()?, &path, dir, from.as_deref()),
        Commands::Rm { path } => execute_remove(&open()?, &path),
        Commands::Revert { paths, all } => execute_revert(&open()?, &paths, all),
        Commands::Focus { path } => execute_focus(&open()?, &path),
        Commands::Sync => execute_sync(&open()?).await,
        Commands::Commit { message } => execute_commit(&open()?, &message).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli.command).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
