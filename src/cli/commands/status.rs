use colored::*;
use log::info;

use crate::config::ConfigStore;

/// Report whether the configuration file exists. Read-only, never fails.
pub fn status_command(store: Option<&ConfigStore>) -> bool {
    info!("Executing status command");

    println!("{}", "📊 wztools Status".blue());
    println!();

    match store.filter(|s| s.exists()) {
        Some(store) => {
            println!("{}", "✅ Configuration file exists".green());
            println!("{}", format!("   Location: {}", store.path().display()).dimmed());
            println!();
            println!("{}", "🚀 Ready to use: wztools clear_cache".blue());
            true
        }
        None => {
            println!("{}", "⚠️  Configuration file not found".yellow());
            println!();
            println!("{}", "💡 Run: wztools init".blue());
            false
        }
    }
}
