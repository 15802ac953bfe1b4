//! `inferlane config`: show the configuration the adapter would run with.

use std::path::Path;

use console::style;

use inferlane_infra::backend::credential_env_vars;
use inferlane_infra::config::load_config;
use inferlane_types::config::AdapterConfig;

pub async fn show_config(path: &Path) -> anyhow::Result<()> {
    let config = load_config(path).await?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    print_notes(&config);
    Ok(())
}

/// Hints on stderr so stdout stays machine-readable.
fn print_notes(config: &AdapterConfig) {
    if config.fell_back_to_local() {
        eprintln!(
            "  {} provider '{}' is not recognised, using local",
            style("!").yellow().bold(),
            config.configured_provider.as_deref().unwrap_or_default()
        );
    }
    for var in credential_env_vars(config.provider) {
        let status = if std::env::var(var).is_ok() {
            style("set").green()
        } else {
            style("not set").red()
        };
        eprintln!("  {} {var}: {status}", style("•").dim());
    }
}
