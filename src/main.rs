use dioxus_logger::tracing::{self, Level};

use scitrack::client::{self, config::Config};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");

    let config = Config::from_env().unwrap_or_else(|err| {
        tracing::error!("Configuration error, using defaults: {}", err);
        Config::default()
    });
    tracing::info!("Using registry backend at {}", config.api_base_url);

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(client::App);
}
