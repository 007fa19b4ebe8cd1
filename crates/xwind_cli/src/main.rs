//! XWind CLI - Wind-Load Coefficient Lookups
//!
//! Command-line entry point for the ASCE 7-22 coefficient tables.
//!
//! # Commands
//!
//! - `xwind windward` - Windward roof coefficients from plan length, height and angle
//! - `xwind leeward` - Leeward roof coefficient from h/L and angle
//! - `xwind parallel` - Roof zone coefficients for wind parallel to the ridge
//! - `xwind wall` - Wall coefficients
//! - `xwind velocity` - Exposure coefficient and velocity pressure
//! - `xwind pressure` - Design pressures by the directional procedure
//! - `xwind check` - Validate the embedded tables
//!
//! # Architecture
//!
//! As the service layer, this crate only parses arguments, resolves
//! configuration and prints what the domain crate computes.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xwind_core::types::{EnclosureType, ExposureCategory, StructureFlexibility, SurfaceType};

mod commands;
mod config;
mod error;
mod output;

use commands::Context;
use config::{build_config, CliArgs};
pub use error::{CliError, Result};

/// XWind wind-load coefficient CLI
#[derive(Parser)]
#[command(name = "xwind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Decimal places in table output
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    /// Do not warn when an input is clamped into a table domain
    #[arg(long, global = true)]
    no_clamp_warnings: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Windward roof coefficients, wind normal to ridge
    #[command(allow_negative_numbers = true)]
    Windward {
        /// Plan length parallel to the wind, L (ft)
        #[arg(short, long)]
        length: f64,

        /// Mean roof height, h (ft)
        #[arg(short = 'H', long)]
        height: f64,

        /// Roof angle (degrees)
        #[arg(short, long)]
        angle: f64,

        /// Tributary plan area (ft²)
        #[arg(long)]
        area: Option<f64>,
    },

    /// Leeward roof coefficient, wind normal to ridge
    #[command(allow_negative_numbers = true)]
    Leeward {
        /// Ratio of mean roof height to plan length
        #[arg(long)]
        h_over_l: f64,

        /// Roof angle (degrees)
        #[arg(short, long)]
        angle: f64,

        /// Tributary plan area (ft²)
        #[arg(long)]
        area: Option<f64>,
    },

    /// Roof zone coefficients, wind parallel to ridge
    Parallel {
        /// Ratio of mean roof height to plan length
        #[arg(long)]
        h_over_l: f64,

        /// Tributary plan area (ft²)
        #[arg(long)]
        area: Option<f64>,
    },

    /// Wall coefficients
    Wall {
        /// Plan length parallel to the wind, L (ft)
        #[arg(short, long)]
        length: f64,

        /// Plan width normal to the wind, B (ft)
        #[arg(short, long)]
        width: f64,

        /// Surface (windward-wall, leeward-wall, side-wall)
        #[arg(short, long)]
        surface: SurfaceType,
    },

    /// Exposure coefficient Kz and velocity pressure qz
    Velocity {
        /// Basic wind speed, V (mph)
        #[arg(long)]
        speed: f64,

        /// Exposure category (B, C, D)
        #[arg(short, long)]
        exposure: ExposureCategory,

        /// Height above ground (ft); start of the range with --z-end
        #[arg(short, long)]
        z: f64,

        /// Last height of a range (ft)
        #[arg(long)]
        z_end: Option<f64>,

        /// Height increment of a range (ft)
        #[arg(long, default_value = "5")]
        z_step: f64,

        /// Topographic factor
        #[arg(long, default_value = "1.0")]
        kzt: f64,

        /// Ground elevation factor
        #[arg(long, default_value = "1.0")]
        ke: f64,
    },

    /// Design pressures by the directional procedure
    #[command(allow_negative_numbers = true)]
    Pressure {
        /// Basic wind speed, V (mph)
        #[arg(long)]
        speed: f64,

        /// Exposure category (B, C, D)
        #[arg(short, long)]
        exposure: ExposureCategory,

        /// Mean roof height, h (ft)
        #[arg(short = 'H', long)]
        height: f64,

        /// Plan length parallel to the wind, L (ft)
        #[arg(short, long)]
        length: f64,

        /// Plan width normal to the wind, B (ft)
        #[arg(short, long)]
        width: f64,

        /// Roof angle (degrees)
        #[arg(short, long)]
        angle: f64,

        /// Enclosure classification
        #[arg(long, default_value = "enclosed")]
        enclosure: EnclosureType,

        /// Structure flexibility (rigid, flexible)
        #[arg(long, default_value = "rigid")]
        flexibility: StructureFlexibility,

        /// Height on the windward wall (ft); defaults to the mean roof height
        #[arg(short, long)]
        z: Option<f64>,

        /// Topographic factor
        #[arg(long, default_value = "1.0")]
        kzt: f64,

        /// Ground elevation above sea level (ft)
        #[arg(long, default_value = "0")]
        elevation: f64,

        /// Single surface to evaluate; all supported surfaces when omitted
        #[arg(short, long)]
        surface: Option<SurfaceType>,
    },

    /// Validate the embedded coefficient tables
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        format: cli.format.clone(),
        precision: cli.precision,
        no_clamp_warnings: cli.no_clamp_warnings,
    };
    let config = build_config(&args).context("failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());
    info!("XWind v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        log_level = %config.log_level,
        format = %config.format,
        precision = config.precision,
        warn_on_clamp = config.warn_on_clamp,
        "Configuration loaded"
    );

    let ctx = Context::from_config(&config);
    run(&ctx, cli.command)?;
    Ok(())
}

fn run(ctx: &Context, command: Commands) -> Result<()> {
    match command {
        Commands::Windward {
            length,
            height,
            angle,
            area,
        } => commands::roof::windward(ctx, length, height, angle, area),
        Commands::Leeward {
            h_over_l,
            angle,
            area,
        } => commands::roof::leeward(ctx, h_over_l, angle, area),
        Commands::Parallel { h_over_l, area } => commands::roof::parallel(ctx, h_over_l, area),
        Commands::Wall {
            length,
            width,
            surface,
        } => commands::wall::run(ctx, length, width, surface),
        Commands::Velocity {
            speed,
            exposure,
            z,
            z_end,
            z_step,
            kzt,
            ke,
        } => commands::velocity::run(
            ctx,
            speed,
            exposure,
            commands::velocity::Heights { z, z_end, z_step },
            kzt,
            ke,
        ),
        Commands::Pressure {
            speed,
            exposure,
            height,
            length,
            width,
            angle,
            enclosure,
            flexibility,
            z,
            kzt,
            elevation,
            surface,
        } => {
            let building = commands::pressure::Building {
                speed,
                exposure,
                enclosure,
                flexibility,
                height,
                length,
                width,
                angle,
                z,
                kzt,
                elevation,
            };
            commands::pressure::run(ctx, &building, surface)
        }
        Commands::Check => commands::check::run(ctx),
    }
}
