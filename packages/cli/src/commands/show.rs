use crate::config::Config;
use crate::site;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitebuilder_document::grid::node_columns;
use sitebuilder_document::ComponentNode;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Print the site file as JSON instead of a tree
    #[arg(long)]
    pub json: bool,
}

pub fn show(args: ShowArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let builder = site::open(&config, cwd)?;

    if args.json {
        println!("{}", builder.export()?);
        return Ok(());
    }

    let theme = builder.theme();
    println!(
        "{} {} ({} components)",
        "Site".bright_blue().bold(),
        config.site_file.bright_white(),
        builder.document().count_nodes()
    );
    println!("  theme: {} {}", theme.name, theme.colors.primary.dimmed());
    println!();

    let roots = builder.root_components();
    if roots.is_empty() {
        println!("  {}", "(empty)".dimmed());
    }
    for node in roots {
        print_node(node, 1);
    }

    Ok(())
}

fn print_node(node: &ComponentNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let mut line = format!("{}{} {}", indent, node.kind.as_str().bright_white(), node.id.dimmed());

    if let Some(title) = node.prop_str("title") {
        line.push_str(&format!(" \"{}\"", title));
    }
    if let Some(columns) = node_columns(node) {
        line.push_str(&format!(" [{} cols]", columns));
    }
    if !node.kind.is_known() {
        line.push_str(&format!(" {}", "(unknown type)".yellow()));
    }
    println!("{}", line);

    for child in node.children() {
        print_node(child, depth + 1);
    }
}
