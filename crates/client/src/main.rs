//! sitecms CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use sitecms_client::cli::{Cli, Commands, OutputFormat};
use sitecms_client::output::{format_output, pretty};
use sitecms_client::{CmsClient, Config, InMemorySource, SiteService};
use sitecms_core::{theme, ContentSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitecms=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_overrides(cli.base_url.clone(), cli.asset_host.clone());
    let assets = config.asset_host();

    match &cli.fixtures {
        Some(dir) => {
            let source = InMemorySource::from_dir(dir)
                .with_context(|| format!("Failed to load fixtures from {}", dir.display()))?;
            tracing::info!(dir = %dir.display(), "using fixtures");
            run(SiteService::new(source, assets), cli.command, cli.format).await
        }
        None => {
            let client = CmsClient::from_config(&config);
            tracing::info!(base_url = client.base_url(), "using CMS");
            run(SiteService::new(client, assets), cli.command, cli.format).await
        }
    }
}

async fn run<S: ContentSource>(
    service: SiteService<S>,
    command: Commands,
    format: OutputFormat,
) -> Result<()> {
    match command {
        Commands::GlobalConfig => {
            let config = service.global_config().await?;
            println!("{}", format_output(&config, format, pretty::format_global_config));
        }
        Commands::Header => {
            let header = service.header().await?;
            println!("{}", format_output(&header, format, pretty::format_header));
        }
        Commands::Footer => {
            let footer = service.footer().await?;
            println!("{}", format_output(&footer, format, pretty::format_footer));
        }
        Commands::Page { key } => {
            let page = service.page(&key).await?;
            println!(
                "{}",
                format_output(&page, format, |page| pretty::format_page(&key, page.as_ref()))
            );
        }
        Commands::Theme => {
            let config = service.global_config().await?;
            match format {
                OutputFormat::Json => {
                    let variables = theme::css_variables(&config);
                    println!("{}", serde_json::to_string_pretty(&variables)?);
                }
                OutputFormat::Pretty => println!("{}", theme::root_style(&config)),
            }
        }
    }

    Ok(())
}
