use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};

use amep_config::AmepConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;

/// Handle `amep init`: scaffold a config file the layered loader will pick
/// up on the next run.
pub fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dir = flags.config_dir.as_deref().unwrap_or(".amep");
    let path = write_scaffold(Path::new(dir), args)?;
    if !flags.quiet {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn write_scaffold(dir: &Path, args: &InitArgs) -> anyhow::Result<PathBuf> {
    let path = dir.join("config.toml");
    if path.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let mut config = AmepConfig::default();
    if let Some(base_url) = &args.base_url {
        config.service.base_url = base_url.clone();
    }
    if let Some(teacher) = &args.teacher {
        config.service.teacher_id = teacher.clone();
    }

    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let rendered = toml::to_string_pretty(&config).context("failed to render config")?;
    fs::write(&path, rendered).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
