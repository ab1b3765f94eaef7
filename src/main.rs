//! Sibyl CLI - Main entry point.

use sibyl::cli::{parse_features, Cli, Commands};
use sibyl::config::SibylConfig;
use sibyl::model::ModelHost;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Serve {
            bind,
            model,
            metrics_addr,
            no_metrics,
        } => {
            // Config file first, CLI flags override.
            let mut config = match &cli.config {
                Some(path) => SibylConfig::from_file(path)?,
                None => SibylConfig::default(),
            };

            if let Some(bind) = bind {
                config.server.bind_addr = bind.parse()?;
            }
            if let Some(model) = model {
                config.model.path = model;
            }
            if let Some(metrics_addr) = metrics_addr {
                config.observability.metrics_addr = metrics_addr.parse()?;
            }
            if no_metrics {
                config.observability.metrics_enabled = false;
            }
            config.observability.log_level = cli.log_level;

            config.validate()?;
            sibyl::run(config).await?;
        }

        Commands::Predict { model, features } => {
            let host = match ModelHost::load(&model) {
                Ok(host) => host,
                Err(e) => {
                    eprintln!("Failed to load model: {}", e);
                    std::process::exit(1);
                }
            };

            let features = match parse_features(&features) {
                Ok(features) => features,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            match host.predict(&features) {
                Ok(label) => println!("{}", label),
                Err(e) => {
                    eprintln!("Prediction failed: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Validate { model } => match ModelHost::load(&model) {
            Ok(host) => {
                println!("Model: {}", host.model_name());
                println!("Classes: {}", host.num_classes());
                println!("Features: {}", host.num_features());
            }
            Err(e) => {
                eprintln!("Invalid model artifact: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Version => {
            println!("Sibyl v{}", env!("CARGO_PKG_VERSION"));
            println!("HTTP serving for a pre-trained linear classifier");
        }
    }

    Ok(())
}
