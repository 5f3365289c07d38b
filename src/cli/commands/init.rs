use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use log::{debug, info};
use std::path::PathBuf;

use crate::config::{ConfigField, ConfigStore, WzConfig};
use crate::error::WzError;
use crate::ui::FieldPrompter;

#[derive(Args, Debug, Default, Clone)]
pub struct InitArgs {
    /// OAuth client ID
    #[arg(long)]
    pub client_id: Option<String>,
    /// OAuth client secret
    #[arg(long)]
    pub client_secret: Option<String>,
    /// User ID for the password grant
    #[arg(long)]
    pub user_id: Option<String>,
    /// User password for the password grant
    #[arg(long)]
    pub password: Option<String>,
    /// XSUAA authentication URL (https://...)
    #[arg(long)]
    pub xsuaa_url: Option<String>,
    /// Work Zone host name, without protocol
    #[arg(long)]
    pub workzone_host: Option<String>,
    /// SAP subdomain
    #[arg(long)]
    pub subdomain: Option<String>,
    /// SAP subaccount ID
    #[arg(long)]
    pub subaccount_id: Option<String>,
}

impl InitArgs {
    pub fn value(&self, field: ConfigField) -> Option<&str> {
        let value = match field {
            ConfigField::ClientId => &self.client_id,
            ConfigField::ClientSecret => &self.client_secret,
            ConfigField::UserId => &self.user_id,
            ConfigField::Password => &self.password,
            ConfigField::XsuaaUrl => &self.xsuaa_url,
            ConfigField::WorkzoneHost => &self.workzone_host,
            ConfigField::Subdomain => &self.subdomain,
            ConfigField::SubaccountId => &self.subaccount_id,
        };
        value.as_deref()
    }

    /// Fields whose flag is absent or fails validation.
    pub fn unresolved_fields(&self) -> Vec<ConfigField> {
        ConfigField::ALL
            .into_iter()
            .filter(|field| match self.value(*field) {
                Some(value) => field.validate(value).is_err(),
                None => true,
            })
            .collect()
    }
}

/// Merge flag values with prompted answers for everything not usable as given.
pub fn collect_config<P: FieldPrompter>(args: &InitArgs, prompter: &mut P) -> Result<WzConfig> {
    let unresolved = args.unresolved_fields();

    for field in &unresolved {
        if let Some(Err(e)) = args.value(*field).map(|v| field.validate(v)) {
            println!("{} {}", "⚠".yellow(), e);
        }
    }

    if unresolved.is_empty() {
        println!("{}", "✅ Using provided CLI options".green());
    } else {
        if !prompter.is_interactive() {
            let flags = unresolved
                .iter()
                .map(|f| format!("--{}", f.flag()))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(WzError::NonInteractive { flags }.into());
        }
        println!(
            "{}",
            "📝 Please provide the following configuration values:".yellow()
        );
        println!();
    }

    let config = WzConfig::try_from_fields(|field| {
        if !unresolved.contains(&field) {
            // Resolved fields always carry a validated flag value.
            return Ok(field.normalize(args.value(field).unwrap_or_default()));
        }
        debug!("Prompting for {}", field.flag());
        prompter.prompt(field)
    })?;

    Ok(config)
}

pub async fn init_command<P: FieldPrompter>(
    args: InitArgs,
    store: &ConfigStore,
    prompter: &mut P,
) -> Result<PathBuf> {
    info!("Starting init");
    println!("{}", "🚀 Initializing wztools configuration...".blue());
    println!();

    let config = collect_config(&args, prompter)?;

    store
        .save(&config)
        .context("Failed to save configuration")?;

    println!();
    println!("{}", "✅ Configuration saved successfully!".green());
    println!("{}", format!("   Config file: {}", store.path().display()).dimmed());
    println!();
    println!("{}", "🎉 You can now run: wztools clear_cache".blue());

    Ok(store.path().to_path_buf())
}
