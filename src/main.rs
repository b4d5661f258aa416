use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use polyglot_console::config_manager::ViewSettings;
use polyglot_console::translation::TranslationServiceFactory;
use polyglot_console::view::{TranslationRequestView, ViewController};
use polyglot_console::{terminal, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the rendered view
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("polyglot_console=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (config, loaded_from) = Config::discover()?;
    config.validate()?;
    match loaded_from {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file found; using defaults"),
    }

    let service = TranslationServiceFactory::create(&config.client)?;
    let view = TranslationRequestView::new(ViewSettings::from_config(&config.view));
    let mut controller = ViewController::new(view, service);

    terminal::run(
        &mut controller,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    info!("Bye");
    Ok(())
}
