//! C header rendering
//!
//! Register blocks can be rendered as a C header, for firmware and drivers
//! which are not written in Rust. The output wraps every definition in an
//! include guard and, for C++ translation units, in an `extern "C"` block. It
//! depends on nothing but the block itself, so rendering the same block always
//! yields the same bytes.

use core::fmt::{self, Display, Formatter, Write};

use log::debug;

use crate::{Error, RegisterBlock};

/// Name of the include guard macro of a block, e.g.
/// `_HCI_ECC_MANAGER_REG_DEFS_`.
pub const fn guard(block: &RegisterBlock) -> Guard {
    Guard {
        prefix: block.prefix,
    }
}

/// See [guard]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    prefix: &'static str,
}

impl Display for Guard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "_{}_REG_DEFS_", self.prefix)
    }
}

/// Renders `block` as a C header into `out`.
///
/// The block is validated first; defective blocks are never rendered.
pub fn render<W>(block: &RegisterBlock, out: &mut W) -> Result<(), Error>
where
    W: Write + ?Sized,
{
    block.validate()?;
    debug!("Rendering C header for {}", block.name);

    let include_guard = guard(block);

    writeln!(out, "// Generated register defines for {}", block.name)?;
    writeln!(out)?;
    writeln!(out, "#ifndef {include_guard}")?;
    writeln!(out, "#define {include_guard}")?;
    writeln!(out)?;
    writeln!(out, "#ifdef __cplusplus")?;
    writeln!(out, "extern \"C\" {{")?;
    writeln!(out, "#endif")?;

    writeln!(out, "// Register width")?;
    writeln!(out, "#define {} {}", block.width_symbol(), block.param_width)?;
    writeln!(out)?;

    for reg in block {
        writeln!(out, "// {}", reg.description)?;
        writeln!(out, "#define {} {:#x}", block.symbol(reg), reg.offset)?;
        writeln!(out)?;
    }

    writeln!(out, "#ifdef __cplusplus")?;
    writeln!(out, "}}  // extern \"C\"")?;
    writeln!(out, "#endif")?;
    writeln!(out, "#endif  // {include_guard}")?;
    write!(out, "// End generated register defines for {}", block.name)?;

    Ok(())
}

/// Renders `block` as a C header into a new string.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn to_string(block: &RegisterBlock) -> Result<String, Error> {
    let mut out = String::new();
    render(block, &mut out)?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Register;

    const DEMO: RegisterBlock = RegisterBlock::new(
        "demo_block",
        "DEMO",
        16,
        &[
            Register::new("CTRL", 0x0, "Control"),
            Register::new("STATUS", 0x1a, "Status"),
        ],
    );

    /// Accepts `capacity` bytes, then fails.
    struct Bounded {
        written: usize,
        capacity: usize,
    }

    impl Write for Bounded {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.written += s.len();
            if self.written > self.capacity {
                Err(fmt::Error)
            } else {
                Ok(())
            }
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_render_small_block() {
        let expected = "// Generated register defines for demo_block

#ifndef _DEMO_REG_DEFS_
#define _DEMO_REG_DEFS_

#ifdef __cplusplus
extern \"C\" {
#endif
// Register width
#define DEMO_PARAM_REG_WIDTH 16

// Control
#define DEMO_CTRL_REG_OFFSET 0x0

// Status
#define DEMO_STATUS_REG_OFFSET 0x1a

#ifdef __cplusplus
}  // extern \"C\"
#endif
#endif  // _DEMO_REG_DEFS_
// End generated register defines for demo_block";

        assert_eq!(to_string(&DEMO).unwrap(), expected);
    }

    #[test]
    fn test_guard() {
        assert_eq!(std::format!("{}", guard(&DEMO)), "_DEMO_REG_DEFS_");
    }

    #[test]
    fn test_refuses_defective_block() {
        const BROKEN: RegisterBlock = RegisterBlock::new(
            "broken",
            "BROKEN",
            32,
            &[Register::new("A", 0x0, ""), Register::new("B", 0x2, "")],
        );

        let mut out = std::string::String::new();
        let result = render(&BROKEN, &mut out);

        assert!(matches!(result, Err(Error::MisalignedOffset { name: "B", .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_sink_failure() {
        let mut out = Bounded {
            written: 0,
            capacity: 64,
        };

        assert_eq!(render(&DEMO, &mut out), Err(Error::Render(fmt::Error)));
    }
}
