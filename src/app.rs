use crate::cli::{Args, is_config_update};
use crate::commands;
use crate::config::Config;
use crate::data_fetcher::{ApiClient, FootballDataProvider};
use crate::error::AppError;
use crate::ui::{self, InteractiveOptions};
use std::sync::Arc;

/// Runs whichever mode the arguments ask for.
///
/// Configuration commands never touch the network. Every other mode loads
/// the config first so a missing key fails before any drawing happens.
pub async fn run(args: &Args) -> Result<(), AppError> {
    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_update(args) {
        return commands::handle_config_update_command(args).await;
    }

    let config = Config::load().await?;
    let provider: Arc<dyn FootballDataProvider> = Arc::new(ApiClient::new(&config)?);
    tracing::info!(
        "Using {} for country {}",
        config.api_base_url,
        config.country_id
    );

    if args.once {
        return commands::handle_once_command(args, provider).await;
    }

    run_interactive(args, provider).await
}

/// Run the interactive application flow.
pub async fn run_interactive(
    args: &Args,
    provider: Arc<dyn FootballDataProvider>,
) -> Result<(), AppError> {
    ui::run_interactive_ui(
        provider,
        InteractiveOptions {
            disable_links: args.disable_links,
            debug_mode: args.debug,
        },
    )
    .await
}
