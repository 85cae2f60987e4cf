use stark_resolver_domain::{CliOverrides, Config};

/// Loads, overrides and validates the configuration. Runs before logging
/// is installed, so failures surface through the returned error only.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
