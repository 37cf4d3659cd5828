use crate::config::Config;
use crate::site;
use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use sitebuilder_document::{builtin_templates, find_template};
use sitebuilder_editor::{EditorError, TemplateStore};

#[derive(Subcommand, Debug)]
pub enum TemplatesCommand {
    /// List built-in and saved templates
    List,

    /// Save the current site as a template
    Save {
        name: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Delete a saved template
    Delete { id: String },

    /// Replace the current site with a template
    Load { id: String },
}

pub fn templates(command: TemplatesCommand, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let store = TemplateStore::new(config.get_templates_file(cwd));

    match command {
        TemplatesCommand::List => {
            println!("{}", "Built-in templates".bright_blue().bold());
            for template in builtin_templates() {
                println!(
                    "  {} {} ({})",
                    template.id.bright_white(),
                    template.name,
                    template.description.dimmed()
                );
            }

            println!();
            println!("{}", "Saved templates".bright_blue().bold());
            let saved = store.list();
            if saved.is_empty() {
                println!("  {}", "(none)".dimmed());
            }
            for template in saved {
                println!(
                    "  {} {} [{} components, {}] {}",
                    template.id.bright_white(),
                    template.name,
                    template.components.count_nodes(),
                    template.theme.name,
                    template.created_at.dimmed()
                );
            }
        }

        TemplatesCommand::Save { name, description } => {
            let builder = site::open(&config, cwd)?;
            let id = store.save(&name, &description, builder.document(), builder.theme())?;
            println!("{} Saved {} as {}", "✅".green(), name, id.bright_white());
        }

        TemplatesCommand::Delete { id } => {
            store.delete(&id)?;
            println!("{} Deleted {}", "✅".green(), id);
        }

        TemplatesCommand::Load { id } => {
            let mut builder = site::open(&config, cwd)?;

            if let Some(template) = find_template(&id) {
                builder.load_template(template.components, template.theme);
            } else if let Some(saved) = store.get(&id) {
                builder.load_template(saved.components, saved.theme);
            } else {
                return Err(EditorError::TemplateNotFound(id).into());
            }

            site::save(&builder, &config.get_site_file(cwd))?;
            println!(
                "{} Loaded {} into {} ({} components)",
                "✅".green(),
                id,
                config.site_file,
                builder.document().count_nodes()
            );
        }
    }

    Ok(())
}
