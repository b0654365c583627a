use clap::{Parser, Subcommand};
use git_commit_rows::commands::*;
use git_commit_rows::core::{error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-commit-rows")]
#[command(about = "Format a commit list snapshot into styled table rows")]
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
    /// Render commits from a JSON snapshot, one row per line
    Render {
        /// JSON file holding an array of commits, or "-" for stdin
        input: PathBuf,
        /// Use the fixed full description layout
        #[arg(long = "full", conflicts_with = "no_full")]
        full_description: bool,
        /// Use the template layout even if the config enables full description
        #[arg(long = "no-full")]
        no_full: bool,
        /// Column template (e.g. "short-sha|author|message")
        #[arg(short, long)]
        template: Option<String>,
        /// Hash of the commit selected for diffing
        #[arg(long = "diff")]
        diff_target: Option<String>,
        /// Hash of a cherry-picked commit (repeatable)
        #[arg(long = "cherry-picked")]
        cherry_picked: Vec<String>,
        /// Print without colors
        #[arg(long)]
        plain: bool,
        /// Config file to use instead of the default location
        #[arg(long = "config")]
        config_path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match cli.command {
        Commands::Render {
            input,
            full_description,
            no_full,
            template,
            diff_target,
            cherry_picked,
            plain,
            config_path,
        } => {
            let full_description = match (full_description, no_full) {
                (true, _) => Some(true),
                (false, true) => Some(false),
                (false, false) => None,
            };
            let options = RenderOptions {
                input,
                full_description,
                template,
                diff_target,
                cherry_picked,
                plain,
                config_path,
            };
            if let Err(e) = execute_render(options) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
