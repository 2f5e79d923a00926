//! Card QR CLI
//!
//! Usage:
//!   card-qr [OPTIONS] <CARD_ID>
//!
//! Options:
//!   -o, --orientation <ORIENTATION>  vertical or horizontal
//!   -c, --colours <COLOURS>          normal or inverted
//!   -s, --size <SIZE>                XS, S or M
//!   --host <URI>                     Verifier base address
//!   --config <FILE>                  Factory configuration (TOML format)
//!   --logo-dir <DIR>                 Directory with {orientation}_{colours}.svg logos
//!   --out <FILE>                     Write the SVG to a file instead of stdout
//!   -h, --help                       Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use card_qr::{FactoryConfig, QrFactory};

#[derive(Parser)]
#[command(name = "card-qr")]
#[command(about = "Verification QR codes composed with an institution logo")]
struct Cli {
    /// Card identifier appended to the verifier address
    card_id: String,

    /// Logo placement: vertical (logo above) or horizontal (logo right)
    #[arg(short, long, default_value = "vertical")]
    orientation: String,

    /// Colour polarity: normal or inverted
    #[arg(short, long, default_value = "normal")]
    colours: String,

    /// Size class: XS, S or M
    #[arg(short, long, default_value = "S")]
    size: String,

    /// Verifier base address
    #[arg(long)]
    host: Option<String>,

    /// Factory configuration file (TOML format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the logo files
    #[arg(long)]
    logo_dir: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write the SVG on a single line
    #[arg(long)]
    compact: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "card_qr=debug"
    } else {
        "card_qr=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => match FactoryConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FactoryConfig::default(),
    };

    if let Some(host) = cli.host {
        config = config.with_verifier_uri(host);
    }
    if let Some(dir) = cli.logo_dir {
        config = config.with_logo_dir(dir);
    }
    if cli.compact {
        config.output.pretty_print = false;
    }

    let factory = QrFactory::from_config(config);
    let svg = match factory.generate_code(&cli.card_id, &cli.orientation, &cli.colours, &cli.size)
    {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.out {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", svg.trim_end()),
    }
}
