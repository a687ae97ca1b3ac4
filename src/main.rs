use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use region_data_aggregator::http;
use region_data_aggregator::utils::{logger, validation::Validate};
use region_data_aggregator::CliArgs;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = args.load_config().context("Failed to load configuration")?;

    // 初始化日誌
    logger::init_logger(&config.logging, args.verbose).context("Failed to initialise logging")?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e).context("Invalid configuration");
    }
    tracing::debug!("Service config: {:?}", config);

    let (host, port) = config.bind_address();
    tracing::info!("🚀 Starting region data aggregator on {}:{}", host, port);

    let aggregator = web::Data::new(http::build_aggregator(&config));
    let server_config = config.server.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(http::cors(&server_config))
            .wrap(TracingLogger::default())
            .app_data(aggregator.clone())
            .configure(http::config)
    })
    .bind((host, port))?
    .run()
    .await
    .context("Server failed to run")
}
