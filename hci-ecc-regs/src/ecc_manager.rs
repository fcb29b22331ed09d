//! Register definitions for the HCI_ECC_manager block
//!
//! The ECC manager counts the errors found by the ECC decoders of the
//! interconnect, split by payload (data or metadata) and by severity
//! (correctable or uncorrectable). Each counter is one 32-bit register.
//!
//! Offsets are relative to the base address at which the block is mapped:
//!
//! ```
//! use hci_ecc_regs::ecc_manager::{self, EccRegister};
//!
//! const BASE: u32 = 0x1020_0000;
//!
//! let addr = BASE + ecc_manager::METADATA_CORRECTABLE_ERRORS_REG_OFFSET;
//! assert_eq!(addr, EccRegister::MetadataCorrectableErrors.address(BASE));
//! ```

use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

use crate::{Register, RegisterBlock};

/// Register width
pub const PARAM_REG_WIDTH: u32 = 32;

/// Correctable errors on data caught by ecc on interconnect
pub const DATA_CORRECTABLE_ERRORS_REG_OFFSET: u32 = 0x0;
/// Uncorrectable errors on data caught by ecc on interconnect
pub const DATA_UNCORRECTABLE_ERRORS_REG_OFFSET: u32 = 0x4;
/// Correctable errors caught on metadata by ecc on interconnect
pub const METADATA_CORRECTABLE_ERRORS_REG_OFFSET: u32 = 0x8;
/// Uncorrectable errors caught on metadata by ecc on interconnect
pub const METADATA_UNCORRECTABLE_ERRORS_REG_OFFSET: u32 = 0xc;

/// Correctable data error counter
pub const DATA_CORRECTABLE_ERRORS: Register = Register::new(
    "DATA_CORRECTABLE_ERRORS",
    DATA_CORRECTABLE_ERRORS_REG_OFFSET,
    "Correctable errors on data caught by ecc on interconnect",
);
/// Uncorrectable data error counter
pub const DATA_UNCORRECTABLE_ERRORS: Register = Register::new(
    "DATA_UNCORRECTABLE_ERRORS",
    DATA_UNCORRECTABLE_ERRORS_REG_OFFSET,
    "Uncorrectable errors on data caught by ecc on interconnect",
);
/// Correctable metadata error counter
pub const METADATA_CORRECTABLE_ERRORS: Register = Register::new(
    "METADATA_CORRECTABLE_ERRORS",
    METADATA_CORRECTABLE_ERRORS_REG_OFFSET,
    "Correctable errors caught on metadata by ecc on interconnect",
);
/// Uncorrectable metadata error counter
pub const METADATA_UNCORRECTABLE_ERRORS: Register = Register::new(
    "METADATA_UNCORRECTABLE_ERRORS",
    METADATA_UNCORRECTABLE_ERRORS_REG_OFFSET,
    "Uncorrectable errors caught on metadata by ecc on interconnect",
);

/// All registers of the block, in ascending offset order.
pub const REGISTERS: &[Register] = &[
    DATA_CORRECTABLE_ERRORS,
    DATA_UNCORRECTABLE_ERRORS,
    METADATA_CORRECTABLE_ERRORS,
    METADATA_UNCORRECTABLE_ERRORS,
];

/// The ECC manager register block.
pub const BLOCK: RegisterBlock =
    RegisterBlock::new("HCI_ECC_manager", "HCI_ECC_MANAGER", PARAM_REG_WIDTH, REGISTERS);

const _: () = assert!(BLOCK.check(), "HCI_ECC_manager register table is inconsistent");

/// Registers of the ECC manager
///
/// The discriminant of each variant is its byte offset.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    VariantNames,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u32)]
pub enum EccRegister {
    /// Correctable errors on data
    DataCorrectableErrors = DATA_CORRECTABLE_ERRORS_REG_OFFSET,
    /// Uncorrectable errors on data
    DataUncorrectableErrors = DATA_UNCORRECTABLE_ERRORS_REG_OFFSET,
    /// Correctable errors on metadata
    MetadataCorrectableErrors = METADATA_CORRECTABLE_ERRORS_REG_OFFSET,
    /// Uncorrectable errors on metadata
    MetadataUncorrectableErrors = METADATA_UNCORRECTABLE_ERRORS_REG_OFFSET,
}

impl EccRegister {
    /// Byte offset of the register within the block.
    pub const fn offset(self) -> u32 {
        self as u32
    }

    /// Full definition of the register.
    pub const fn register(self) -> &'static Register {
        match self {
            EccRegister::DataCorrectableErrors => &DATA_CORRECTABLE_ERRORS,
            EccRegister::DataUncorrectableErrors => &DATA_UNCORRECTABLE_ERRORS,
            EccRegister::MetadataCorrectableErrors => &METADATA_CORRECTABLE_ERRORS,
            EccRegister::MetadataUncorrectableErrors => &METADATA_UNCORRECTABLE_ERRORS,
        }
    }

    /// Absolute address of the register for a block mapped at `base`.
    pub const fn address(self, base: u32) -> u32 {
        base + self.offset()
    }

    /// Like [EccRegister::address], but `None` on overflow.
    pub const fn checked_address(self, base: u32) -> Option<u32> {
        base.checked_add(self.offset())
    }

    /// The register mapped at `offset`, if any.
    pub const fn from_offset(offset: u32) -> Option<Self> {
        match offset {
            DATA_CORRECTABLE_ERRORS_REG_OFFSET => Some(EccRegister::DataCorrectableErrors),
            DATA_UNCORRECTABLE_ERRORS_REG_OFFSET => Some(EccRegister::DataUncorrectableErrors),
            METADATA_CORRECTABLE_ERRORS_REG_OFFSET => Some(EccRegister::MetadataCorrectableErrors),
            METADATA_UNCORRECTABLE_ERRORS_REG_OFFSET => {
                Some(EccRegister::MetadataUncorrectableErrors)
            }
            _ => None,
        }
    }

    /// Whether the register counts errors the hardware fixed on its own.
    pub const fn is_correctable(self) -> bool {
        matches!(
            self,
            EccRegister::DataCorrectableErrors | EccRegister::MetadataCorrectableErrors
        )
    }

    /// Whether the register counts errors on metadata rather than data.
    pub const fn is_metadata(self) -> bool {
        matches!(
            self,
            EccRegister::MetadataCorrectableErrors | EccRegister::MetadataUncorrectableErrors
        )
    }
}

impl From<EccRegister> for u32 {
    fn from(reg: EccRegister) -> Self {
        reg.offset()
    }
}

impl TryFrom<u32> for EccRegister {
    type Error = u32;

    fn try_from(offset: u32) -> Result<Self, Self::Error> {
        Self::from_offset(offset).ok_or(offset)
    }
}
