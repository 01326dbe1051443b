//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    // Storefront section
    ctx.output.info("");
    ctx.output.info("[storefront]");
    ctx.output.kv("name", &ctx.config.storefront.name);
    ctx.output.kv("currency", &ctx.config.storefront.currency);

    // Catalog section
    ctx.output.info("");
    ctx.output.info("[catalog]");
    match &ctx.config.catalog.path {
        Some(path) => ctx.output.kv("path", &path.display().to_string()),
        None => ctx.output.kv("path", "(built-in)"),
    }
    ctx.output.kv("artworks", &ctx.catalog.len().to_string());

    // Checkout section
    ctx.output.info("");
    ctx.output.info("[checkout]");
    ctx.output.kv(
        "processing_delay_ms",
        &ctx.config.checkout.processing_delay_ms.to_string(),
    );

    // Session section
    ctx.output.info("");
    ctx.output.info("[session]");
    ctx.output.kv("dir", &ctx.session.dir().display().to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("atelier.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config(&ctx.config.storefront.name);
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.validate();

    if errors.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(error);
    }
    bail!("Configuration has {} error(s)", errors.len());
}
