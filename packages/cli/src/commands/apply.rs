use crate::config::Config;
use crate::site;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Deserialize;
use serde_json::Value;
use sitebuilder_document::find_theme;
use sitebuilder_editor::{Builder, Mutation};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// JSON array of edit steps
    pub script: PathBuf,

    /// Apply and report without writing the site file
    #[arg(long)]
    pub dry_run: bool,
}

/// One entry of an edit script: a tree mutation or a session action
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Edit(Mutation),
    Action(Action),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    Undo,
    Redo,
    Select { id: Option<String> },
    TogglePreview,
    SetProp { id: String, key: String, value: Value },
    SetStyle { id: String, key: String, value: Value },
    SetTheme { name: String },
}

/// What happened to one step
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied(String),
    Skipped(String),
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    serde_json::from_str(text).context("Edit script must be a JSON array of steps")
}

/// Run every step against `builder`; a step that cannot apply is skipped
pub fn run_script(builder: &mut Builder, steps: &[ScriptStep]) -> Vec<Outcome> {
    steps
        .iter()
        .map(|step| match run_step(builder, step) {
            Ok(message) => Outcome::Applied(message),
            Err(err) => Outcome::Skipped(err.to_string()),
        })
        .collect()
}

fn run_step(builder: &mut Builder, step: &ScriptStep) -> Result<String> {
    match step {
        ScriptStep::Edit(mutation) => {
            let inserted = builder.apply(mutation)?;
            Ok(match inserted {
                Some(id) => format!("{} → {}", mutation.name(), id),
                None => mutation.name().to_string(),
            })
        }

        ScriptStep::Action(Action::Undo) => {
            if builder.undo() {
                Ok("undo".to_string())
            } else {
                Err(anyhow!("nothing to undo"))
            }
        }

        ScriptStep::Action(Action::Redo) => {
            if builder.redo() {
                Ok("redo".to_string())
            } else {
                Err(anyhow!("nothing to redo"))
            }
        }

        ScriptStep::Action(Action::Select { id }) => {
            builder.select(id.as_deref());
            Ok(format!("select {}", id.as_deref().unwrap_or("none")))
        }

        ScriptStep::Action(Action::TogglePreview) => {
            let preview = builder.toggle_preview();
            Ok(format!("preview {}", if preview { "on" } else { "off" }))
        }

        ScriptStep::Action(Action::SetProp { id, key, value }) => {
            builder.set_prop(id, key, value.clone())?;
            Ok(format!("setProp {}.{}", id, key))
        }

        ScriptStep::Action(Action::SetStyle { id, key, value }) => {
            builder.set_style(id, key, value.clone())?;
            Ok(format!("setStyle {}.{}", id, key))
        }

        ScriptStep::Action(Action::SetTheme { name }) => {
            let theme = find_theme(name).ok_or_else(|| anyhow!("Unknown theme: {}", name))?;
            builder.set_theme(theme);
            Ok(format!("setTheme {}", name))
        }
    }
}

pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut builder = site::open(&config, cwd)?;

    let text = fs::read_to_string(&args.script)
        .with_context(|| format!("Cannot read {}", args.script.display()))?;
    let steps = parse_script(&text)?;

    println!(
        "{} {} steps from {}",
        "Applying".bright_blue().bold(),
        steps.len(),
        args.script.display()
    );

    let outcomes = run_script(&mut builder, &steps);
    let mut skipped = 0;
    for outcome in &outcomes {
        match outcome {
            Outcome::Applied(message) => println!("  {} {}", "✓".green(), message),
            Outcome::Skipped(reason) => {
                skipped += 1;
                println!("  {} skipped: {}", "⚠️".yellow(), reason);
            }
        }
    }

    println!();
    println!(
        "History: {} snapshots, cursor at {}",
        builder.history().len(),
        builder.history().cursor()
    );
    if let Some(id) = builder.selected() {
        println!("Selected: {}", id);
    }

    if args.dry_run {
        println!("{}", "Dry run, site file not written".dimmed());
    } else {
        site::save(&builder, &config.get_site_file(cwd))?;
        println!(
            "{} Wrote {} ({} applied, {} skipped)",
            "✅".green(),
            config.site_file,
            outcomes.len() - skipped,
            skipped
        );
    }

    Ok(())
}
