use anyhow::Result;

use vignette_core::AppConfig;

pub fn run(config: &AppConfig, save: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if save {
        config.save()?;
        println!("Saved configuration to {}", path.display());
        return Ok(());
    }

    let source = if path.exists() { "" } else { " (not found, showing defaults)" };
    println!("# Config: {}{}", path.display(), source);
    println!("# Log:    {}", config.log_path().display());
    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}
