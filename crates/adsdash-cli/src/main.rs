mod export;
mod report;

use std::path::PathBuf;

use adsdash_core::{AppConfig, DateRange, PlatformFilter, TenantContext};
use adsdash_windsor::WindsorClient;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "adsdash")]
#[command(about = "Ads dashboard data from the Windsor connector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load every dashboard domain and print it as JSON
    Dashboard(QueryArgs),
    /// Print the campaign performance table and its totals
    Summary(QueryArgs),
    /// Export campaign performance rows as CSV
    Export {
        #[command(flatten)]
        query: QueryArgs,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Tenant and filter options shared by every command.
#[derive(Debug, Args)]
struct QueryArgs {
    /// Connector API key (falls back to `ADSDASH_API_KEY`)
    #[arg(long)]
    api_key: Option<String>,
    /// Project the key belongs to, used for log context
    #[arg(long)]
    project: Option<String>,
    /// Date preset: `last_7d`, `last_30d`, `this_month`, `last_month`
    #[arg(long, default_value = "last_30d")]
    range: DateRange,
    /// Platform filter for performance data: all, google, facebook
    #[arg(long, default_value = "all")]
    platform: PlatformFilter,
}

impl QueryArgs {
    fn tenant(&self, config: &AppConfig) -> TenantContext {
        let tenant = TenantContext::new(self.api_key.clone().or_else(|| config.api_key.clone()));
        match &self.project {
            Some(project) => tenant.with_project_id(project.clone()),
            None => tenant,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = adsdash_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = WindsorClient::from_app_config(&config)?;

    match cli.command {
        Commands::Dashboard(query) => {
            report::run_dashboard(&client, &query.tenant(&config), query.range, query.platform)
                .await
        }
        Commands::Summary(query) => {
            report::run_summary(&client, &query.tenant(&config), query.range, query.platform)
                .await
        }
        Commands::Export { query, output } => {
            export::run_export(
                &client,
                &query.tenant(&config),
                query.range,
                query.platform,
                output.as_deref(),
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests;
