use anyhow::Result;
use colored::Colorize;
use sitebuilder_document::{accepts_at_root, component_library};

/// Print the insertable component palette
pub fn library() -> Result<()> {
    println!("{}", "Components".bright_blue().bold());

    for entry in component_library() {
        let mut placement = Vec::new();
        if accepts_at_root(&entry.kind) {
            placement.push("root");
        }
        if entry.can_be_in_grid {
            placement.push("grid");
        }

        println!(
            "  {:<16} {:<14} {} {}",
            entry.kind.as_str().bright_white(),
            entry.name,
            entry.description.dimmed(),
            format!("[{}]", placement.join(", ")).cyan()
        );
    }

    Ok(())
}
