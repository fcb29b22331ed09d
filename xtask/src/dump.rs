use clap::{Args, ValueEnum};
use hci_ecc_regs::{RegisterBlock, ecc_manager};
use serde::Serialize;

use crate::Result;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    /// One register per line
    #[default]
    Text,
    /// YAML document
    Yaml,
}

#[derive(Debug, Args)]
pub(crate) struct DumpRegistersArgs {
    /// Base address at which the ECC manager is mapped
    #[arg(short, long, default_value = "0x0", value_parser = parse_hex_u32)]
    base: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
}

#[derive(Debug, Serialize)]
struct Dump {
    base: String,
    block: &'static RegisterBlock,
    addresses: Vec<Address>,
}

#[derive(Debug, Serialize)]
struct Address {
    register: &'static str,
    address: String,
}

pub(crate) fn dump_registers(args: DumpRegistersArgs) -> Result<()> {
    let block = &ecc_manager::BLOCK;
    log::debug!("Dumping {} at {:#010x}", block.name, args.base);

    check_base(block, args.base)?;

    match args.format {
        Format::Text => print!("{}", render_text(block, args.base)),
        Format::Yaml => print!("{}", render_yaml(block, args.base)?),
    }

    Ok(())
}

/// Ensures that every register of `block` is addressable when the block is
/// mapped at `base`.
fn check_base(block: &RegisterBlock, base: u32) -> Result<()> {
    match block.iter().find(|reg| reg.checked_address(base).is_none()) {
        Some(reg) => Err(format!(
            "{} mapped at {base:#010x} does not fit in the address space ({} at offset {:#x} overflows)",
            block.name, reg.name, reg.offset
        )
        .into()),
        None => Ok(()),
    }
}

/// Expects a base accepted by [check_base].
fn render_text(block: &RegisterBlock, base: u32) -> String {
    let mut out = format!(
        "{} ({}-bit registers, base {base:#010x})\n",
        block.name, block.param_width
    );

    for reg in block {
        out.push_str(&format!(
            "{:<58} {:>#6x} {:#010x}  {}\n",
            block.symbol(reg).to_string(),
            reg.offset,
            reg.address(base),
            reg.description
        ));
    }

    out
}

/// Expects a base accepted by [check_base].
fn render_yaml(block: &'static RegisterBlock, base: u32) -> Result<String> {
    let dump = Dump {
        base: format!("{base:#010x}"),
        block,
        addresses: block
            .iter()
            .map(|reg| Address {
                register: reg.name,
                address: format!("{:#010x}", reg.address(base)),
            })
            .collect(),
    };

    Ok(serde_yaml::to_string(&dump)?)
}

fn parse_hex_u32(value: &str) -> std::result::Result<u32, String> {
    let hex = value.trim_start_matches("0x").trim_start_matches("0X");

    u32::from_str_radix(hex, 16).map_err(|err| format!("invalid hexadecimal address: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_u32() {
        assert_eq!(parse_hex_u32("0x10200000"), Ok(0x1020_0000));
        assert_eq!(parse_hex_u32("0X10"), Ok(0x10));
        assert_eq!(parse_hex_u32("ff"), Ok(0xff));
        assert!(parse_hex_u32("0xgg").is_err());
        assert!(parse_hex_u32("0x1_0000_0000").is_err());
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&ecc_manager::BLOCK, 0x1000_0000);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "HCI_ECC_manager (32-bit registers, base 0x10000000)"
        );
        assert!(lines[4].starts_with("HCI_ECC_MANAGER_METADATA_UNCORRECTABLE_ERRORS_REG_OFFSET"));
        assert!(lines[4].contains("0x1000000c"));
    }

    #[test]
    fn test_check_base() {
        let block = &ecc_manager::BLOCK;

        assert!(check_base(block, 0x0).is_ok());
        assert!(check_base(block, 0xffff_fff0).is_ok());

        let err = check_base(block, parse_hex_u32("0xfffffff8").unwrap()).unwrap_err();
        assert!(
            err.to_string().contains("METADATA_CORRECTABLE_ERRORS"),
            "{err}"
        );
        assert!(check_base(block, u32::MAX).is_err());
    }

    #[test]
    fn test_render_yaml() {
        let yaml = render_yaml(&ecc_manager::BLOCK, 0x1020_0000).unwrap();
        let dump: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(dump["base"].as_str(), Some("0x10200000"));
        assert_eq!(dump["block"]["name"].as_str(), Some("HCI_ECC_manager"));
        assert_eq!(dump["block"]["prefix"].as_str(), Some("HCI_ECC_MANAGER"));
        assert_eq!(dump["block"]["param_width"].as_u64(), Some(32));

        let registers = dump["block"]["registers"].as_sequence().unwrap();
        assert_eq!(registers.len(), 4);
        assert_eq!(
            registers[1]["name"].as_str(),
            Some("DATA_UNCORRECTABLE_ERRORS")
        );
        assert_eq!(registers[3]["offset"].as_u64(), Some(0xc));

        let addresses = dump["addresses"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|entry| {
                (
                    entry["register"].as_str().unwrap(),
                    entry["address"].as_str().unwrap(),
                )
            })
            .collect::<Vec<_>>();
        assert_eq!(
            addresses,
            [
                ("DATA_CORRECTABLE_ERRORS", "0x10200000"),
                ("DATA_UNCORRECTABLE_ERRORS", "0x10200004"),
                ("METADATA_CORRECTABLE_ERRORS", "0x10200008"),
                ("METADATA_UNCORRECTABLE_ERRORS", "0x1020000c"),
            ]
        );
    }
}
