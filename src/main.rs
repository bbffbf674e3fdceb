use aboutme::cli::Cli;
use aboutme::config::Config;
use aboutme::utils::{AppError, OutputStyle, report_error, set_color_enabled};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<AppError>() {
            Some(app_err) => report_error(app_err),
            None => eprintln!("❌ {}", OutputStyle::error(&format!("{:#}", err))),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);
    let config = Config::load_custom(&config_path)?;
    set_color_enabled(config.general.color);

    tracing::debug!(path = %config_path.display(), "loaded configuration");

    cli.command.execute(config, &config_path).await
}

fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "aboutme=debug,tower_http=debug"
    } else {
        "aboutme=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
