//! Register table defects

use core::fmt;

#[cfg(feature = "std")]
use miette::Diagnostic;
use thiserror::Error;

/// All possible defects of a register table
///
/// These can only arise from a badly generated table; the tables shipped with
/// this crate are checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "std", derive(Diagnostic))]
#[non_exhaustive]
pub enum Error {
    #[error("Registers `{first}` and `{second}` both map to offset {offset:#x}")]
    #[cfg_attr(
        feature = "std",
        diagnostic(
            code(hci_ecc_regs::duplicate_offset),
            help("Registers in a block must not alias; regenerate the table from the hardware description")
        )
    )]
    DuplicateOffset {
        first: &'static str,
        second: &'static str,
        offset: u32,
    },

    #[error("Register `{name}` is defined more than once")]
    #[cfg_attr(feature = "std", diagnostic(code(hci_ecc_regs::duplicate_name)))]
    DuplicateName { name: &'static str },

    #[error("Register `{name}` has offset {offset:#x}, which is not aligned to {alignment} bytes")]
    #[cfg_attr(
        feature = "std",
        diagnostic(
            code(hci_ecc_regs::misaligned_offset),
            help("Every offset must be a multiple of the register width in bytes")
        )
    )]
    MisalignedOffset {
        name: &'static str,
        offset: u32,
        alignment: u32,
    },

    #[error("Invalid register width: {0} bits")]
    #[cfg_attr(
        feature = "std",
        diagnostic(
            code(hci_ecc_regs::invalid_width),
            help("The register width must be a non-zero multiple of 8")
        )
    )]
    InvalidWidth(u32),

    #[error("Failed to write the rendered header")]
    #[cfg_attr(feature = "std", diagnostic(code(hci_ecc_regs::render)))]
    Render(#[from] fmt::Error),
}
