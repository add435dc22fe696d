use anyhow::Result;
use tracing::info;

use slipscroll_core::ScrollSettings;

/// Print the effective configuration; optionally seed the config file.
pub fn run(settings: &ScrollSettings, init: bool) -> Result<()> {
    let path = ScrollSettings::config_path();

    if init {
        if path.exists() {
            info!(path = %path.display(), "configuration file already exists");
        } else {
            settings.save()?;
            info!(path = %path.display(), "configuration file written");
        }
    }

    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(settings)?);
    Ok(())
}
