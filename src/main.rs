use std::path::{Path, PathBuf};
use std::process;

use asset_pipeline::commands::png_optimize::{self, FileSavings};
use asset_pipeline::commands::{relative_display, splash_generate};
use asset_pipeline::config::{OptimizeConfig, SplashConfig};
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "asset-pipeline")]
#[command(about = "Build-time tools for iOS launch screens and PNG assets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate iOS launch images from the app icon
    Splash {
        /// Project root containing icons/ios and splash
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Re-compress every PNG under icons/ios and splash in place
    Optimize {
        /// Project root containing icons/ios and splash
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Splash { root } => {
            let config = SplashConfig::new(&root);
            let on_written = |path: &Path| {
                println!("Wrote {}", relative_display(&config.root, path));
            };
            match splash_generate::run(&config, Some(on_written)) {
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
        Commands::Optimize { root } => {
            let config = OptimizeConfig::new(&root);
            let on_progress = |savings: &FileSavings| {
                log::info!(
                    "{}: {} -> {} bytes",
                    relative_display(&config.root, &savings.path),
                    savings.before,
                    savings.after
                );
            };
            match png_optimize::run(&config, Some(on_progress)) {
                Ok(summary) => {
                    println!("{}", summary);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
    }
}
