use crate::config::Config;
use crate::site;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use sitebuilder_editor::Builder;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Exported site file to replace the current site with
    pub file: PathBuf,
}

pub fn import(args: ImportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Cannot read {}", args.file.display()))?;

    // The site file is only replaced once the import has been accepted
    let mut builder = Builder::new().with_history_limit(config.history_limit);
    builder
        .import(&text)
        .with_context(|| format!("Cannot import {}", args.file.display()))?;

    site::save(&builder, &config.get_site_file(cwd))?;

    println!(
        "{} Imported {} components ({} theme) into {}",
        "✅".green(),
        builder.document().count_nodes(),
        builder.theme().name,
        config.site_file
    );

    Ok(())
}
