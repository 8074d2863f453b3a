mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::server::{
    bot, config::Config, error::AppError, router, service::pet_notification::PetChangeNotifier,
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Arc::new(Config::from_env()?);

    let db = startup::connect_to_database(&config).await?;
    let catalog = startup::load_catalog(&config, db).await?;

    tracing::info!("Starting server");

    let bot_client = bot::start::init_bot(&config, catalog.clone()).await?;
    let notifier = PetChangeNotifier::new(bot_client.http.clone(), config.pet_update_channel_id);
    if !notifier.is_enabled() {
        tracing::info!("PET_UPDATE_CHANNEL_ID not set, admin changes will not be announced");
    }

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let listener = TcpListener::bind(config.http_bind_addr.as_str()).await?;
    tracing::info!("Listening on {}", config.http_bind_addr);

    axum::serve(listener, router::router(AppState::new(catalog, notifier))).await?;

    Ok(())
}
