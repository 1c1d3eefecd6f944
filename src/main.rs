// src/main.rs

use log::{debug, error, info};
use env_logger::Env;
use shor_factor::cli::{self, CliArgs};
use shor_factor::algorithms::shor::FactorFinder;
use shor_factor::config::ShorConfig;
use shor_factor::core::cancellation_token::CancellationToken;

fn main() {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    if raw_args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", cli::USAGE);
        return;
    }

    let args = match CliArgs::parse(&raw_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n\n{}", e, cli::USAGE);
            std::process::exit(2);
        }
    };

    let loaded = match &args.config_path {
        Some(path) => ShorConfig::load_from_file(path),
        None => ShorConfig::load(),
    };
    let (mut config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (ShorConfig::default(), Some(e)),
    };
    args.apply_to(&mut config);

    // Initialize the logger
    let env = Env::default()
        .filter_or("SHOR_LOG_LEVEL", config.log_level.clone())
        .write_style_or("SHOR_LOG_STYLE", "always");

    env_logger::Builder::from_env(env).init();

    if let Some(e) = config_error {
        error!("Could not load configuration ({}), using defaults", e);
    }
    debug!("Configuration: {:?}", config);

    let cancel_token = CancellationToken::new();
    let handler_token = cancel_token.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Interrupt received, cancelling");
        handler_token.cancel();
    }) {
        error!("Could not install Ctrl-C handler: {}", e);
    }

    let finder = FactorFinder::new(config).with_cancellation(cancel_token);
    std::process::exit(cli::run(&args, &finder));
}
