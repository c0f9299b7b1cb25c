//! Configuration bootstrap for the CLI.

use std::path::Path;

use amep_config::AmepConfig;
use anyhow::Context as _;

use crate::cli::GlobalFlags;

/// Load layered configuration, honoring `--config-dir`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AmepConfig> {
    load_dotenv(flags)?;
    AmepConfig::load_from(flags.config_dir.as_deref().map(Path::new))
        .context("failed to load configuration")
}

/// Load `.env` before building the figment so AMEP_* variables land in the
/// environment layer.
fn load_dotenv(flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(dir) = flags.config_dir.as_deref() {
        let env_path = Path::new(dir).join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to read {}", env_path.display()))?;
        }
        return Ok(());
    }
    // No explicit dir: pick up ./.env when present, quietly skip otherwise.
    let _ = dotenvy::dotenv();
    Ok(())
}
