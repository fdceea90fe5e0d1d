use artspace_core::Gallery;
use artspace_source::{
    load_records, write_bincode, ArtworkSource, BundledSource, FileSource, Order,
};
use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};
use std::path::PathBuf;
use std::str::FromStr;

use crate::viewer::{render, Viewer};

mod viewer;

/// Viewer for the ArtSpace gallery.
#[derive(Parser, Debug)]
#[clap(version)]
struct ArtSpaceCli {
    /// Enables debug logging.
    #[clap(short, long, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    View(ViewArgs),
    List(ListArgs),
    Convert(ConvertArgs),
}

/// The order in which the gallery is shown.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct OrderArg(Order);

impl FromStr for OrderArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stored" => Ok(Self(Order::Stored)),
            "year" => Ok(Self(Order::ByYear)),
            _ => Err(format!(
                "unknown order '{}' (expected 'stored' or 'year')",
                s
            )),
        }
    }
}

/// Options for selecting the gallery asset.
#[derive(Args, Debug)]
struct SourceArgs {
    /// A gallery asset file (.json or .bincode). The bundled gallery is used if omitted.
    #[clap(long)]
    asset: Option<PathBuf>,
    /// The order of the gallery: 'stored' or 'year'.
    #[clap(long, default_value = "stored")]
    order: OrderArg,
}

impl SourceArgs {
    fn load(&self) -> anyhow::Result<Vec<artspace_core::ArtworkRecord>> {
        match &self.asset {
            Some(path) => {
                info!("Using gallery asset: {}", path.display());
                load_records(&FileSource::new(path)?, self.order.0)
            }
            None => {
                info!("Using bundled gallery.");
                load_records(&BundledSource::new(), self.order.0)
            }
        }
    }
}

/// Steps through the gallery interactively. Reads n(ext), p(revious) and q(uit) from standard input.
#[derive(Args, Debug)]
struct ViewArgs {
    #[clap(flatten)]
    source: SourceArgs,
    /// The (zero-based) position to start at.
    #[clap(long, default_value_t = 0)]
    start: usize,
}

/// Prints every artwork in the gallery.
#[derive(Args, Debug)]
struct ListArgs {
    #[clap(flatten)]
    source: SourceArgs,
}

/// Converts a gallery asset into the bincode format.
#[derive(Args, Debug)]
struct ConvertArgs {
    /// The target output file.
    #[clap(name = "out", short = 'o', long = "out")]
    out_path: PathBuf,
    /// The gallery asset to convert.
    #[clap(name = "ASSET")]
    in_path: PathBuf,
}

fn view(args: &ViewArgs) -> anyhow::Result<()> {
    let records = args.source.load()?;
    let gallery = Gallery::with_position(records, args.start)?;

    let stdin = std::io::stdin();
    let mut viewer = Viewer::new(gallery, std::io::stdout());
    viewer.run(stdin.lock())?;
    info!("Left the gallery at position {}.", viewer.gallery().position());
    Ok(())
}

fn list(args: &ListArgs) -> anyhow::Result<()> {
    let records = args.source.load()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (position, record) in records.iter().enumerate() {
        render(&mut out, record, position, records.len())?;
    }
    Ok(())
}

fn convert(args: &ConvertArgs) -> anyhow::Result<()> {
    let records = FileSource::new(&args.in_path)?.load()?;
    info!(
        "Writing {} artworks to {}.",
        records.len(),
        args.out_path.display()
    );
    write_bincode(&records, &args.out_path)
}

fn main() -> anyhow::Result<()> {
    let cli_args: ArtSpaceCli = ArtSpaceCli::parse();

    let level = if cli_args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Off)
        .with_module_level(env!("CARGO_CRATE_NAME"), level)
        .with_module_level("artspace_source", level)
        .init()?;

    match &cli_args.command {
        CliCommand::View(args) => view(args)?,
        CliCommand::List(args) => list(args)?,
        CliCommand::Convert(args) => convert(args)?,
    }

    Ok(())
}
