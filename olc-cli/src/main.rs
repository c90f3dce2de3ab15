use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Open Location Code (Plus Codes) CLI tool
#[derive(Parser)]
#[command(name = "olc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output results as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Log decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a coordinate into a code
    Encode {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Number of significant digits (2, 4, 6, 8, or 10 to 15)
        #[arg(short, long, env = "OLC_CODE_LENGTH", default_value_t = olc::DEFAULT_CODE_LENGTH)]
        length: usize,
    },

    /// Decode a full code into the area it covers
    Decode {
        /// Full code, e.g. 8FVC9G8F+6X
        code: String,

        /// Print the area as a GeoJSON Feature
        #[arg(short, long)]
        geojson: bool,
    },

    /// Shorten a full code relative to a nearby location
    Shorten {
        /// Full code to shorten
        code: String,

        /// Reference latitude
        #[arg(long, env = "OLC_REF_LAT", allow_negative_numbers = true)]
        lat: f64,

        /// Reference longitude
        #[arg(long, env = "OLC_REF_LNG", allow_negative_numbers = true)]
        lng: f64,
    },

    /// Recover the full code nearest to a reference location
    Recover {
        /// Short code, e.g. 9G8F+6X
        code: String,

        /// Reference latitude
        #[arg(long, env = "OLC_REF_LAT", allow_negative_numbers = true)]
        lat: f64,

        /// Reference longitude
        #[arg(long, env = "OLC_REF_LNG", allow_negative_numbers = true)]
        lng: f64,
    },

    /// Report whether a string is a valid, short, full or padded code
    Check {
        /// Code to check
        code: String,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "olc=debug,olc_cli=debug"
    } else {
        "olc=warn,olc_cli=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Encode { lat, lng, length } => commands::encode::run(lat, lng, length, cli.json),
        Commands::Decode { code, geojson } => commands::decode::run(&code, geojson, cli.json),
        Commands::Shorten { code, lat, lng } => commands::shorten::run(&code, lat, lng, cli.json),
        Commands::Recover { code, lat, lng } => commands::recover::run(&code, lat, lng, cli.json),
        Commands::Check { code } => commands::check::run(&code, cli.json),
    }
}
