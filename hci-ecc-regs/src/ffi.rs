//! Unmangled exports for C and C++ consumers
//!
//! Every constant of the ECC manager table is exported under the same name as
//! the corresponding macro of the generated C header, so that a program
//! linking against this crate sees identical values whether it includes the
//! header or declares the symbols itself:
//!
//! ```c
//! extern const uint32_t HCI_ECC_MANAGER_DATA_UNCORRECTABLE_ERRORS_REG_OFFSET;
//! ```

use crate::ecc_manager as regs;

#[no_mangle]
pub static HCI_ECC_MANAGER_PARAM_REG_WIDTH: u32 = regs::PARAM_REG_WIDTH;

#[no_mangle]
pub static HCI_ECC_MANAGER_DATA_CORRECTABLE_ERRORS_REG_OFFSET: u32 =
    regs::DATA_CORRECTABLE_ERRORS_REG_OFFSET;

#[no_mangle]
pub static HCI_ECC_MANAGER_DATA_UNCORRECTABLE_ERRORS_REG_OFFSET: u32 =
    regs::DATA_UNCORRECTABLE_ERRORS_REG_OFFSET;

#[no_mangle]
pub static HCI_ECC_MANAGER_METADATA_CORRECTABLE_ERRORS_REG_OFFSET: u32 =
    regs::METADATA_CORRECTABLE_ERRORS_REG_OFFSET;

#[no_mangle]
pub static HCI_ECC_MANAGER_METADATA_UNCORRECTABLE_ERRORS_REG_OFFSET: u32 =
    regs::METADATA_UNCORRECTABLE_ERRORS_REG_OFFSET;

/// Number of registers in the ECC manager block.
#[no_mangle]
pub extern "C" fn hci_ecc_manager_register_count() -> u32 {
    regs::REGISTERS.len() as u32
}

/// Offset of the `index`-th register of the ECC manager block, in ascending
/// offset order, or -1 if there is no such register.
#[no_mangle]
pub extern "C" fn hci_ecc_manager_register_offset(index: u32) -> i64 {
    regs::REGISTERS
        .get(index as usize)
        .map_or(-1, |reg| i64::from(reg.offset))
}
