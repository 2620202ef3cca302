use std::process::ExitCode;

use actix_web::{App, HttpServer};
use anyhow::Context;
use clap::Parser;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use minibrs::cli::{self, Cli, Commands};
use minibrs::config::Config;
use minibrs::modules::configure_routes;
use minibrs::AppServices;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    config.validate().context("Configuration validation failed")?;

    // Console commands stay quiet unless a level is asked for
    let quiet = cli.command != Commands::Serve && std::env::var_os("LOG_LEVEL").is_none();
    init_tracing(&config, quiet);

    let services = AppServices::open(&config.storage)?;

    match cli.command {
        Commands::Serve => {
            actix_web::rt::System::new().block_on(serve(config, services))?;
        }
        command => {
            let stdout = std::io::stdout();
            cli::run(command, &services, &mut stdout.lock())?;
        }
    }

    Ok(())
}

fn init_tracing(config: &Config, quiet: bool) {
    let default_filter = if quiet {
        "minibrs=warn,actix_web=warn".to_string()
    } else {
        config.log_filter()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn serve(config: Config, services: AppServices) -> std::io::Result<()> {
    tracing::info!("Starting MiniBRS");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Data directory: {}", config.storage.data_dir.display());
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(|cfg| services.configure(cfg))
            .configure(configure_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
