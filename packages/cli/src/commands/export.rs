use crate::config::Config;
use crate::site;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let builder = site::open(&config, cwd)?;
    let text = builder.export()?;

    match args.output {
        Some(path) => {
            fs::write(&path, text).with_context(|| format!("Cannot write {}", path.display()))?;
            println!(
                "{} Exported {} components to {}",
                "✅".green(),
                builder.document().count_nodes(),
                path.display()
            );
        }
        None => println!("{}", text),
    }

    Ok(())
}
