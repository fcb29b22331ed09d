//! Register and register block descriptions
//!
//! A [RegisterBlock] is a flat table of equally sized registers mapped at
//! fixed byte offsets from the base address of a hardware block. Blocks are
//! built in `const` context so that their invariants can be asserted at
//! compile time, see [RegisterBlock::check].

use core::fmt::{self, Display, Formatter};

use log::{debug, trace};

use crate::Error;

/// A single memory-mapped register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Register {
    /// Symbolic name, without the block prefix
    pub name: &'static str,
    /// Byte offset from the base address of the block
    pub offset: u32,
    /// Short description of the register's contents
    pub description: &'static str,
}

impl Register {
    /// Creates a new register definition.
    pub const fn new(name: &'static str, offset: u32, description: &'static str) -> Self {
        Self {
            name,
            offset,
            description,
        }
    }

    /// Absolute address of the register for a block mapped at `base`.
    ///
    /// Overflows if the block does not fit below the top of the address
    /// space; use [Register::checked_address] for untrusted bases.
    pub const fn address(&self, base: u32) -> u32 {
        base + self.offset
    }

    /// Absolute address of the register for a block mapped at `base`, or
    /// `None` if it lies beyond the 32-bit address space.
    pub const fn checked_address(&self, base: u32) -> Option<u32> {
        base.checked_add(self.offset)
    }
}

/// A block of registers sharing one base address and one register width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RegisterBlock {
    /// Name of the block as written in the hardware description
    pub name: &'static str,
    /// Prefix of every exported symbol, e.g. `HCI_ECC_MANAGER`
    pub prefix: &'static str,
    /// Width of every register, in bits
    pub param_width: u32,
    /// Registers of the block
    pub registers: &'static [Register],
}

impl RegisterBlock {
    /// Creates a new register block.
    pub const fn new(
        name: &'static str,
        prefix: &'static str,
        param_width: u32,
        registers: &'static [Register],
    ) -> Self {
        Self {
            name,
            prefix,
            param_width,
            registers,
        }
    }

    /// Size of a single register, in bytes.
    pub const fn register_bytes(&self) -> u32 {
        self.param_width / 8
    }

    /// Number of registers in the block.
    pub const fn len(&self) -> usize {
        self.registers.len()
    }

    /// Whether the block defines no registers at all.
    pub const fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Register> {
        self.registers.iter()
    }

    /// Looks up a register by its unprefixed name.
    pub fn find(&self, name: &str) -> Option<&'static Register> {
        self.registers.iter().find(|reg| reg.name == name)
    }

    /// Looks up the register mapped at `offset`.
    pub fn find_by_offset(&self, offset: u32) -> Option<&'static Register> {
        self.registers.iter().find(|reg| reg.offset == offset)
    }

    /// Symbol under which the offset of `register` is exported.
    pub const fn symbol(&self, register: &Register) -> Symbol {
        Symbol {
            prefix: self.prefix,
            stem: register.name,
            suffix: "_REG_OFFSET",
        }
    }

    /// Symbol under which the register width is exported.
    pub const fn width_symbol(&self) -> Symbol {
        Symbol {
            prefix: self.prefix,
            stem: "PARAM_REG_WIDTH",
            suffix: "",
        }
    }

    /// Number of bytes from the base address to the end of the last register.
    pub const fn span(&self) -> u32 {
        let mut end = 0;
        let mut i = 0;
        while i < self.registers.len() {
            let reg_end = self.registers[i].offset + self.register_bytes();
            if reg_end > end {
                end = reg_end;
            }
            i += 1;
        }

        end
    }

    /// Whether the registers occupy every slot from offset 0 up to
    /// [RegisterBlock::span] without gaps.
    ///
    /// Densely packed tables are the convention, but not a requirement.
    pub fn is_dense(&self) -> bool {
        let stride = self.register_bytes();
        stride != 0
            && (0..self.registers.len() as u32)
                .all(|slot| self.find_by_offset(slot * stride).is_some())
    }

    /// Returns the first defect of the table, if any.
    ///
    /// Widths are checked first, then every register against the ones
    /// defined before it, so the reported defect is stable for a given table.
    pub const fn first_defect(&self) -> Option<Error> {
        if self.param_width == 0 || self.param_width % 8 != 0 {
            return Some(Error::InvalidWidth(self.param_width));
        }

        let alignment = self.register_bytes();
        let mut i = 0;
        while i < self.registers.len() {
            let reg = &self.registers[i];
            if reg.offset % alignment != 0 {
                return Some(Error::MisalignedOffset {
                    name: reg.name,
                    offset: reg.offset,
                    alignment,
                });
            }

            let mut j = 0;
            while j < i {
                let other = &self.registers[j];
                if other.offset == reg.offset {
                    return Some(Error::DuplicateOffset {
                        first: other.name,
                        second: reg.name,
                        offset: reg.offset,
                    });
                }
                if str_eq(other.name, reg.name) {
                    return Some(Error::DuplicateName { name: reg.name });
                }
                j += 1;
            }
            i += 1;
        }

        None
    }

    /// Whether the table is free of defects.
    ///
    /// Meant for `const` assertions next to a generated table:
    ///
    /// ```
    /// use hci_ecc_regs::{Register, RegisterBlock};
    ///
    /// const BLOCK: RegisterBlock = RegisterBlock::new(
    ///     "DEMO",
    ///     "DEMO",
    ///     32,
    ///     &[Register::new("CTRL", 0x0, "Control")],
    /// );
    /// const _: () = assert!(BLOCK.check());
    /// ```
    pub const fn check(&self) -> bool {
        self.first_defect().is_none()
    }

    /// Validates the table, returning its first defect as an error.
    pub fn validate(&self) -> Result<(), Error> {
        debug!(
            "Validating register block {} ({} registers, {}-bit)",
            self.name,
            self.len(),
            self.param_width
        );
        for reg in self.registers {
            trace!("{} @ {:#x}", self.symbol(reg), reg.offset);
        }

        match self.first_defect() {
            Some(err) => {
                debug!("Register block {} is defective: {err}", self.name);
                Err(err)
            }
            None => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a RegisterBlock {
    type Item = &'static Register;
    type IntoIter = core::slice::Iter<'static, Register>;

    fn into_iter(self) -> Self::IntoIter {
        self.registers.iter()
    }
}

/// Name of an exported constant, `{prefix}_{stem}{suffix}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    prefix: &'static str,
    stem: &'static str,
    suffix: &'static str,
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}{}", self.prefix, self.stem, self.suffix)
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    true
}
