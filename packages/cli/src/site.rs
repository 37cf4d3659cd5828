use crate::config::Config;
use anyhow::{Context, Result};
use sitebuilder_editor::Builder;
use std::fs;
use std::path::Path;

/// Load the configured site file into a fresh builder
pub fn open(config: &Config, cwd: &str) -> Result<Builder> {
    let path = config.get_site_file(cwd);
    let text = fs::read_to_string(&path).with_context(|| {
        format!(
            "Cannot read {} (run `sitebuilder init` first)",
            path.display()
        )
    })?;

    let mut builder = Builder::new().with_history_limit(config.history_limit);
    builder
        .import(&text)
        .with_context(|| format!("Cannot load {}", path.display()))?;

    tracing::debug!(
        "Opened {} ({} nodes, history limit {})",
        path.display(),
        builder.document().count_nodes(),
        config.history_limit
    );
    Ok(builder)
}

/// Write the builder's current document and theme to `path`
pub fn save(builder: &Builder, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, builder.export()?)
        .with_context(|| format!("Cannot write {}", path.display()))?;
    Ok(())
}
