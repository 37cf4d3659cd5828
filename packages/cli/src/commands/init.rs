use crate::config::{Config, DEFAULT_CONFIG_NAME};
use crate::site;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sitebuilder_document::{find_template, find_theme, Document};
use sitebuilder_editor::{Builder, TemplateStore};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Start from a built-in or saved template (e.g. business-modern)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Site file to create
    #[arg(short, long, default_value = "site.json")]
    pub site_file: String,

    /// Force overwrite existing config and site file
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing site...".bright_blue().bold());

    let config = Config {
        site_file: args.site_file.clone(),
        ..Config::default()
    };

    let mut builder = Builder::new();
    match &args.template {
        Some(id) => {
            if let Some(template) = find_template(id) {
                builder.load_template(template.components, template.theme);
            } else if let Some(saved) = TemplateStore::new(config.get_templates_file(cwd)).get(id) {
                builder.load_template(saved.components, saved.theme);
            } else {
                return Err(anyhow!("Unknown template: {}", id));
            }
            println!("  {} Using template {}", "✓".green(), id.bright_white());
        }
        None => {
            let theme = find_theme(&config.default_theme)
                .ok_or_else(|| anyhow!("Unknown theme: {}", config.default_theme))?;
            builder.load_template(Document::new(), theme);
        }
    }

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let site_path = config.get_site_file(cwd);
    if site_path.exists() && !args.force {
        println!("  {} Kept existing {}", "•".yellow(), args.site_file);
    } else {
        site::save(&builder, &site_path)?;
        println!(
            "  {} Created {} ({} components)",
            "✓".green(),
            args.site_file,
            builder.document().count_nodes()
        );
    }

    println!();
    println!("{}", "✅ Site initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: sitebuilder library");
    println!("  2. Write an edit script and run: sitebuilder apply edits.json");
    println!("  3. Run: sitebuilder show");

    Ok(())
}
