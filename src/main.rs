//! Herbal Garden - a terminal virtual garden of medicinal plants
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use herbal_garden::LaunchOptions;

/// Herbal Garden - browse medicinal plants from your terminal
#[derive(Parser, Debug)]
#[command(name = "herbal-garden", version)]
#[command(about = "A virtual herbal garden for exploring medicinal plants", long_about = None)]
struct Args {
    /// Directory for saved preferences and logs
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Path to the settings file (config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    herbal_garden::run(LaunchOptions {
        data_dir: args.data_dir,
        config_path: args.config,
    })
    .await?;
    Ok(())
}
