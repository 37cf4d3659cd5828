mod commands;
mod config;
mod site;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, export, import, init, library, show, templates, ApplyArgs, ExportArgs, ImportArgs,
    InitArgs, ShowArgs, TemplatesCommand,
};
use tracing_subscriber::EnvFilter;

/// Site Builder CLI - edit site documents from the command line
#[derive(Parser, Debug)]
#[command(name = "sitebuilder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log editor activity (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new site
    Init(InitArgs),

    /// Print the component tree
    Show(ShowArgs),

    /// Apply an edit script to the site
    Apply(ApplyArgs),

    /// Export the site file
    Export(ExportArgs),

    /// Replace the site with an exported file
    Import(ImportArgs),

    /// Manage templates
    Templates {
        #[command(subcommand)]
        command: TemplatesCommand,
    },

    /// List insertable components
    Library,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Show(args) => show(args, &cwd),
                Command::Apply(args) => apply(args, &cwd),
                Command::Export(args) => export(args, &cwd),
                Command::Import(args) => import(args, &cwd),
                Command::Templates { command } => templates(command, &cwd),
                Command::Library => library(),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
