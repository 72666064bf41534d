use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

use launcher_patch::cli::Cli;
use launcher_patch::{logging, patch_file, read_patched};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.dry_run {
        let (patched, _) = read_patched(&cli.file)?;
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(patched.as_bytes())
            .and_then(|()| stdout.flush())
            .context("failed to write patched script to stdout")?;
        return Ok(());
    }

    let report = patch_file(&cli.file)?;

    if cli.json {
        let stdout = io::stdout().lock();
        serde_json::to_writer_pretty(stdout, &report).context("failed to write JSON report")?;
        println!();
    }

    Ok(())
}
