use clap::Parser;
use crs_lookup::utils::{logger, validation::Validate};
use crs_lookup::{CrsAdapter, MapTilerAdapter, MapTilerConfig, ResolveError};

#[derive(Debug, Parser)]
#[command(name = "crs-lookup")]
#[command(about = "Resolve a CRS identifier to its name and projection definition")]
struct Args {
    /// CRS identifier, e.g. "epsg:4326" or "4326"
    crs: String,

    /// Export format of the projection definition, e.g. "wkt" or "proj4"
    #[arg(default_value = "wkt")]
    format: String,

    /// MapTiler API key
    #[arg(long, env = "MAPTILER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Registry endpoint override
    #[arg(long, default_value = crs_lookup::config::DEFAULT_ENDPOINT)]
    endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: crs={}, format={}", args.crs, args.format);

    let config = MapTilerConfig::new(args.api_key).with_endpoint(args.endpoint);
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let adapter = MapTilerAdapter::new(config);

    match adapter.get(&args.crs, &args.format).await {
        Ok(resolution) => {
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        }
        Err(e) => {
            tracing::error!("Resolution failed: {}", e);
            match e {
                ResolveError::UnknownCrs(_) | ResolveError::UnknownCrsFormat(_) => {
                    eprintln!("{}", e);
                    eprintln!(
                        "Supported formats: {}",
                        crs_lookup::core::SUPPORTED_FORMATS.join(", ")
                    );
                }
                _ => eprintln!("{}", e),
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
