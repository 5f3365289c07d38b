use anyhow::Result;
use colored::*;
use log::info;

use crate::auth::XsuaaAuthClient;
use crate::config::ConfigStore;
use crate::workzone::WorkZoneClient;

/// Load config, fetch a token, then trigger the provider cache refresh.
pub async fn clear_cache_command(
    store: &ConfigStore,
    auth: &XsuaaAuthClient,
    workzone: &WorkZoneClient,
) -> Result<()> {
    info!("Executing clear_cache command");
    println!("{}", "🧹 Starting Work Zone cache clear process...".blue());
    println!();

    let config = store.load()?;
    println!("{}", "✅ Configuration loaded successfully".green());
    println!("{}", format!("   Subdomain: {}", config.subdomain).dimmed());
    println!("{}", format!("   Subaccount ID: {}", config.subaccount_id).dimmed());
    println!();

    println!("{}", "🔄 Getting access token...".blue());
    let token = auth.get_access_token(&config).await?;
    println!("{}", "✅ Access token obtained successfully".green());

    println!("{}", "🧹 Clearing Work Zone cache...".blue());
    let outcome = workzone.clear_cache(&config, &token).await?;
    println!("{}", "✅ Work Zone cache cleared successfully!".green());
    println!(
        "{}",
        format!(
            "Response: {} {}",
            outcome.status.as_u16(),
            outcome.status_text()
        )
        .dimmed()
    );

    Ok(())
}
