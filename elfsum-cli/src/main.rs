use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use elfsum_core::ElfDescriptor;

/// Validate the headers of a 64-bit ELF file and count its header tables
#[derive(Parser)]
#[command(
    name = "elfsum",
    about = "Validate an ELF64 file and report its program and section header counts",
    version,
    author
)]
struct Cli {
    /// Path to the ELF file
    #[arg(required = true)]
    path: std::path::PathBuf,
}

fn run(cli: &Cli) -> Result<()> {
    let elf = ElfDescriptor::load(&cli.path)
        .with_context(|| format!("failed to load {}", cli.path.display()))?;
    log::debug!("{} is a valid {:?} object", cli.path.display(), elf.object_type());

    println!("{}", elf.summary());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
