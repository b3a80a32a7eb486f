use anyhow::{anyhow, Context};
use clap::Parser;
use max7456_core::{Converter, McmConverter};
use std::path::PathBuf;
use tracing::{event, Level};

/// Converts a MAX7456 *.mcm font file into an image collection and back
#[derive(Parser)]
#[command(name = "max7456", author, version, about, long_about = None)]
struct Cli {
    /// Path to *.mcm file
    #[arg(short, long, value_name = "FILE", conflicts_with = "encode")]
    decode: Option<PathBuf>,
    /// Path to directory with images
    #[arg(short, long, value_name = "DIR")]
    encode: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let non_empty = |path: Option<PathBuf>| path.filter(|path| !path.as_os_str().is_empty());
    let converter = McmConverter::new();
    match (non_empty(cli.decode), non_empty(cli.encode)) {
        (Some(file), _) => {
            match converter
                .decode(&file)
                .with_context(|| format!("decoding {}", file.display()))?
            {
                Some(directory) => eprintln!("Wrote glyph images to {}", directory.display()),
                None => event!(Level::WARN, file = %file.display(), "font file is empty"),
            }
        }
        (None, Some(directory)) => {
            let output = converter
                .encode(&directory)
                .with_context(|| format!("encoding {}", directory.display()))?;
            eprintln!("Wrote font to {}", output.display());
        }
        (None, None) => return Err(anyhow!("required at least one flag: --decode or --encode")),
    }

    Ok(())
}
