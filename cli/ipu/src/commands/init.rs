//! `ipu init` — device definition scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use ipu_device::config::generate_template;

/// Write `devices/<name>.device.toml` from the template.
///
/// Refuses to overwrite an existing definition.
pub fn run(name: &str, project_dir: &Path) -> Result<()> {
    let devices_dir = project_dir.join("devices");
    fs::create_dir_all(&devices_dir).context("creating devices/ directory")?;

    let path = devices_dir.join(format!("{name}.device.toml"));
    if path.exists() {
        bail!("device definition '{}' already exists", path.display());
    }

    let template = generate_template(name)?;
    fs::write(&path, &template).with_context(|| format!("writing {}", path.display()))?;

    println!("Created device definition '{name}'");
    println!("  {}", path.display());

    Ok(())
}
