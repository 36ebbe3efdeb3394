use anyhow::Result;
use posts_service::{config, logging, server};

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv();

    let config = config::load_from_env()?;
    let _log_guard = logging::init(&config.log_settings())?;

    config.print_summary();

    server::run(config).await
}
