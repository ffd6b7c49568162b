use std::sync::Arc;

use anyhow::Context;

use bokfinder_bot::signals::{self, ReloadSignal};
use bokfinder_bot::transport::TelegramTransport;
use bokfinder_bot::{Dispatcher, Runner};
use bokfinder_infra::{BotConfig, CatalogueHandle, load_catalogue};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bokfinder_observability::init();

    let config = BotConfig::from_env().context("failed to read configuration")?;
    tracing::info!(?config, "configuration loaded");

    let catalogue = load_catalogue(&config.paths).context("failed to load catalogue")?;
    if catalogue.is_empty() {
        tracing::warn!(path = %config.paths.products_txt.display(), "catalogue has no products");
    }
    let catalogue = Arc::new(CatalogueHandle::new(catalogue));

    let transport = TelegramTransport::new(&config).context("failed to build Telegram client")?;

    let reload = ReloadSignal::new();
    signals::spawn_sighup_handler(reload.clone());

    let runner = Runner::new(
        transport,
        catalogue,
        Dispatcher::new(config.review_submit_url.clone()),
        config.paths.clone(),
        reload,
    );
    runner.run(signals::shutdown_signal()).await;

    Ok(())
}
