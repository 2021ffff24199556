use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use svd2bitfilled::gen_peripheral_from_file;

#[derive(Parser, Debug)]
#[command(
    name = "svd2bitfilled",
    version,
    about = "Parse an SVD file and generate bitfilled register map for a peripheral type."
)]
struct Cli {
    /// Path to the input SVD file
    path: PathBuf,

    /// Name of the peripheral or peripheral group for code generation
    peripheral: Option<String>,

    /// Write the register map to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).init()?;

    let output = gen_peripheral_from_file(&cli.path, cli.peripheral.as_deref())?;
    match cli.output {
        Some(path) => std::fs::write(&path, format!("{output}\n"))
            .with_context(|| format!("Unable to write {}", path.display()))?,
        None => println!("{output}"),
    }
    Ok(())
}
