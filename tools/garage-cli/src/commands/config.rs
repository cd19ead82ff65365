//! Configuration management commands.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use garage_commerce::{Currency, Locale};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let store = &ctx.config.store;
    ctx.output.info("[store]");
    ctx.output.kv("catalog_url", &store.catalog_url);
    ctx.output.kv("locale", store.locale.tag());
    ctx.output.kv("currency", store.currency.code());
    ctx.output.kv("store_name", &store.store_name);
    ctx.output.kv("invoice_prefix", &store.invoice_prefix);
    ctx.output.kv("invoice_dir", &store.invoice_dir.display().to_string());

    ctx.output.info("[shop]");
    ctx.output.kv("page_size", &ctx.config.shop.page_size.to_string());

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = match &ctx.config_path {
        Some(path) => path.clone(),
        None => find_config_file(&ctx.cwd)?,
    };
    let path_str = config_path.to_string_lossy().to_string();

    // Reload from disk so environment overrides are not persisted.
    let mut config = CliConfig::load(&path_str)?;
    set_config_value(&mut config, key, value)?;
    config.store.validate()?;
    config.save(&path_str)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut warnings: Vec<String> = Vec::new();
    let store = &ctx.config.store;

    let url = store.catalog_url.trim();
    if url.starts_with("http://") {
        warnings.push("store.catalog_url uses plain http".to_string());
    } else if !url.starts_with("https://") {
        let path = ctx.resolve_path(Path::new(url.trim_start_matches("file://")));
        if !path.is_file() {
            warnings.push(format!("store.catalog_url file not found: {}", path.display()));
        }
    }

    if ctx.config.shop.page_size == 0 {
        warnings.push("shop.page_size of 0 lists one product at a time".to_string());
    }

    if let Err(err) = store.validate() {
        ctx.output.error(&format!("Error: {}", err));
        bail!("Configuration is invalid");
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();
    let store = &config.store;

    let value = match parts.as_slice() {
        ["store", "catalog_url"] => store.catalog_url.clone(),
        ["store", "locale"] => store.locale.tag().to_string(),
        ["store", "currency"] => store.currency.code().to_string(),
        ["store", "store_name"] => store.store_name.clone(),
        ["store", "invoice_prefix"] => store.invoice_prefix.clone(),
        ["store", "invoice_dir"] => store.invoice_dir.display().to_string(),
        ["shop", "page_size"] => config.shop.page_size.to_string(),
        _ => bail!("Unknown config key: {}", key),
    };
    Ok(value)
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let store = &mut config.store;

    match parts.as_slice() {
        ["store", "catalog_url"] => store.catalog_url = value.to_string(),
        ["store", "locale"] => {
            store.locale = Locale::from_tag(value)
                .with_context(|| format!("Unsupported locale: {}", value))?
        }
        ["store", "currency"] => {
            store.currency = Currency::from_code(value)
                .with_context(|| format!("Unsupported currency: {}", value))?
        }
        ["store", "store_name"] => store.store_name = value.to_string(),
        ["store", "invoice_prefix"] => store.invoice_prefix = value.to_string(),
        ["store", "invoice_dir"] => store.invoice_dir = PathBuf::from(value),
        ["shop", "page_size"] => config.shop.page_size = value.parse()?,
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

fn find_config_file(cwd: &Path) -> Result<PathBuf> {
    Context::find_config(cwd)
        .context("No config file found. Run `garage config init` to create one.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_values() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "store.locale", "en-US").unwrap();
        set_config_value(&mut config, "shop.page_size", "5").unwrap();

        assert_eq!(get_config_value(&config, "store.locale").unwrap(), "en-US");
        assert_eq!(get_config_value(&config, "shop.page_size").unwrap(), "5");
        assert_eq!(get_config_value(&config, "store.currency").unwrap(), "CLP");
    }

    #[test]
    fn test_rejects_unknown_keys_and_values() {
        let mut config = CliConfig::default();
        assert!(set_config_value(&mut config, "store.locale", "fr-FR").is_err());
        assert!(set_config_value(&mut config, "shop.page_size", "many").is_err());
        assert!(set_config_value(&mut config, "deploy.canary", "true").is_err());
        assert!(get_config_value(&config, "store").is_err());
    }
}
