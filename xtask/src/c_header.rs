use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Args;
use hci_ecc_regs::{ecc_manager, header};

use crate::Result;

/// Location of the checked-in header, relative to the workspace root
const DEFAULT_HEADER_PATH: &str = "hci-ecc-regs/include/hci_ecc_manager_regs.h";

#[derive(Debug, Args)]
pub(crate) struct GenerateCHeaderArgs {
    /// Where to write the header, relative to the workspace root
    #[arg(short, long, default_value = DEFAULT_HEADER_PATH)]
    output: PathBuf,
}

#[derive(Debug, Args)]
pub(crate) struct CheckCHeaderArgs {
    /// Header to check, relative to the workspace root
    #[arg(short, long, default_value = DEFAULT_HEADER_PATH)]
    path: PathBuf,
}

pub(crate) fn generate_c_header(workspace: &Path, args: GenerateCHeaderArgs) -> Result<()> {
    let path = workspace.join(args.output);
    let rendered = header::to_string(&ecc_manager::BLOCK)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, rendered)?;

    log::info!("Wrote {}", path.display());

    Ok(())
}

pub(crate) fn check_c_header(workspace: &Path, args: CheckCHeaderArgs) -> Result<()> {
    let path = workspace.join(args.path);
    log::debug!("Checking {}", path.display());

    let current = fs::read_to_string(&path)?;
    let rendered = header::to_string(&ecc_manager::BLOCK)?;

    if let Some(line) = first_difference(&current, &rendered) {
        return Err(format!(
            "{} is out of date (first difference on line {line}), run `cargo xtask generate-c-header`",
            path.display()
        )
        .into());
    }

    log::info!("{} is up to date", path.display());

    Ok(())
}

/// Returns the 1-based number of the first line on which `a` and `b` differ.
fn first_difference(a: &str, b: &str) -> Option<usize> {
    if a == b {
        return None;
    }

    let mut a_lines = a.split('\n');
    let mut b_lines = b.split('\n');
    let mut line = 1;

    loop {
        match (a_lines.next(), b_lines.next()) {
            (Some(x), Some(y)) if x == y => line += 1,
            _ => return Some(line),
        }
    }
}
