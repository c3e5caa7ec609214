pub mod cli;
pub mod error;
pub mod logging;
pub mod model;
pub mod names;
pub mod profile;
pub mod tables;
pub mod writer;

pub use error::{LineError, Result, TableError};
pub use model::{Atom, Bif, BifKind, Opcode};
pub use profile::VersionProfile;
pub use tables::{AtomTable, BifTable, OpcodeTable, TableLoader};

use anyhow::{Context, anyhow};
use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // 1. ── Select profile ─────────────────────────────────────────────
    let profile = VersionProfile::for_release(args.otp)
        .ok_or_else(|| anyhow!("no table profile for OTP {}", args.otp))?;

    // 2. ── Load ───────────────────────────────────────────────────────
    let tables = TableLoader::load(profile, &args.table_dir)
        .with_context(|| format!("Loading tables from {}", args.table_dir.display()))?;

    // 3. ── Report ─────────────────────────────────────────────────────
    let mut out = std::io::stdout().lock();
    let written = match args.format {
        cli::Format::Summary => writer::summary::emit(&tables, &mut out),
        cli::Format::Json => writer::json::emit(&tables, &mut out),
    };
    written.with_context(|| "Writing report")?;

    Ok(())
}
