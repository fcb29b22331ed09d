//! Register offsets for the ECC manager of the Heterogeneous Cluster
//! Interconnect (HCI)
//!
//! The ECC manager exposes four 32-bit error counters. This crate provides
//! their byte offsets as compile-time constants, along with a small model of
//! register blocks which is used to check the table and to render it as a C
//! header for non-Rust consumers.
//!
//! ```
//! use hci_ecc_regs::ecc_manager;
//!
//! // Offsets are plain constants, usable anywhere a constant is
//! let mut shadow = [0u32; (ecc_manager::BLOCK.span() / 4) as usize];
//! shadow[(ecc_manager::DATA_UNCORRECTABLE_ERRORS_REG_OFFSET / 4) as usize] = 1;
//! assert_eq!(shadow, [0, 1, 0, 0]);
//! ```
//!
//! ## Cargo Features
//!
//! - `std` (default): provides [header::to_string] and [miette] diagnostics
//!   for [Error]
//! - `serde`: implements `Serialize` for the register types
//! - `ffi`: exports the offsets as unmangled symbols, see [ffi]
//!
//! [miette]: https://crates.io/crates/miette

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::{
    ecc_manager::EccRegister,
    error::Error,
    register::{Register, RegisterBlock, Symbol},
};

pub mod ecc_manager;
#[cfg(feature = "ffi")]
#[cfg_attr(docsrs, doc(cfg(feature = "ffi")))]
pub mod ffi;
pub mod header;

mod error;
mod register;
