use std::io;

use clap::Parser;
use tagwire::{deserialize_stream, serialize_stream, DriverError, Output};
use tagwire_core::{Base, TypeRegistry};
use tracing_subscriber::EnvFilter;

/// Convert tagged payloads between canonical binary and JSON/multibase text.
#[derive(Debug, Parser)]
#[command(name = "tagwire", version, about)]
struct Cli {
    /// Serialize to binary form
    #[arg(short, long)]
    serialize: bool,

    /// Deserialize from binary form
    #[arg(short, long)]
    deserialize: bool,

    /// Output raw binary records instead of multibase text
    #[arg(short = 'n', long)]
    binary: bool,

    /// Base to serialize to
    #[arg(short, long, default_value = "M")]
    base: String,
}

fn run(cli: Cli) -> Result<(), DriverError> {
    if cli.serialize && cli.deserialize {
        return Err(DriverError::Configuration(
            "cannot specify both --serialize and --deserialize".to_string(),
        ));
    }

    let registry = TypeRegistry::new();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    if cli.deserialize {
        tracing::debug!("deserialize mode");
        return deserialize_stream(&registry, stdin, stdout);
    }

    let output = if cli.binary {
        Output::Binary
    } else {
        let mut chars = cli.base.chars();
        let (Some(prefix), None) = (chars.next(), chars.next()) else {
            return Err(DriverError::Configuration(
                "base must be exactly 1 character".to_string(),
            ));
        };
        let base = Base::from_prefix(prefix).map_err(|_| {
            DriverError::Configuration(format!("unsupported base {:?}", prefix))
        })?;
        Output::Text(base)
    };
    tracing::debug!(?output, "serialize mode");
    serialize_stream(&registry, output, stdin, stdout)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("tagwire: {err}");
        std::process::exit(1);
    }
}
