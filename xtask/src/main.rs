use std::{env, path::PathBuf};

use clap::Parser;

mod c_header;
mod dump;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

// ----------------------------------------------------------------------------
// Command-line Interface

#[derive(Debug, Parser)]
enum Cli {
    /// Write the C header for the ECC manager registers
    GenerateCHeader(c_header::GenerateCHeaderArgs),

    /// Check that the checked-in C header is up to date
    CheckCHeader(c_header::CheckCHeaderArgs),

    /// Print the ECC manager register table
    DumpRegisters(dump::DumpRegistersArgs),
}

// ----------------------------------------------------------------------------
// Application

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_module("xtask", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Determine the path to the workspace (i.e. the root of the repository).
    // The compile-time location of the `xtask` crate may not exist when the
    // binary runs elsewhere, so fall back to the current working directory.
    let workspace_from_build = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("`CARGO_MANIFEST_DIR` should always have a parent")
        .to_path_buf();

    let workspace = if workspace_from_build.exists() {
        workspace_from_build.canonicalize()?
    } else {
        env::current_dir()?.canonicalize()?
    };

    match Cli::parse() {
        Cli::GenerateCHeader(args) => c_header::generate_c_header(&workspace, args),
        Cli::CheckCHeader(args) => c_header::check_c_header(&workspace, args),
        Cli::DumpRegisters(args) => dump::dump_registers(args),
    }
}
