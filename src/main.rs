use clap::Parser;
use grdc_timelapse::utils::{logger, validation::Validate};
use grdc_timelapse::{CliConfig, EtlEngine, GrdcPipeline};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting grdc-timelapse");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let pipeline = GrdcPipeline::new(config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("Time-lapse written to {}", output_path);
        }
        Err(e) => {
            tracing::error!("Pipeline failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
