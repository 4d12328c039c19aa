use rcampaign::logger::{self, LogLevel, LoggerConfig};
use rcampaign::Config;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();

    let mut logger_config = if config.log_json {
        LoggerConfig::production()
    } else {
        LoggerConfig::development()
    };
    if let Some(level) = &config.log_level {
        match level.parse::<LogLevel>() {
            Ok(level) => logger_config = logger_config.with_level(level),
            Err(e) => eprintln!("{}, keeping default level", e),
        }
    }
    logger::init_with_config(logger_config)?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    logger::log_startup_info(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        &config.host,
        config.port(),
    );
    logger::log_config_info(&config);

    if config.gateway.api_key().is_err() {
        log::warn!("⚠️  AI gateway key missing; campaign requests will fail until it is set");
    }

    rcampaign::server::run(config).await?;
    Ok(())
}
