//! Bitfield composition and decomposition of OpenVX enumerated values, plus
//! the big-endian four-character-code helpers used for image formats.

use crate::error::CoreError;

pub const VENDOR_SHIFT: u32 = 20;
/// Shift of the library id (kernels) and enum group id (enums).
pub const GROUP_SHIFT: u32 = 12;
/// Shift of the object type id (attributes).
pub const TYPE_SHIFT: u32 = 8;

const VENDOR_MASK: u32 = 0xFFF0_0000;
const GROUP_MASK: u32 = 0x000F_F000;
const TYPE_MASK: u32 = 0x000F_FF00;

/// `vendor<<20 | secondary<<shift | index`.
pub fn compose(vendor: u32, secondary: u32, shift: u32, index: u32) -> u32 {
    (vendor << VENDOR_SHIFT) | (secondary << shift) | index
}

pub fn vendor_id(value: u32) -> u32 {
    (value & VENDOR_MASK) >> VENDOR_SHIFT
}

pub fn object_type_id(value: u32) -> u32 {
    (value & TYPE_MASK) >> TYPE_SHIFT
}

pub fn enum_id(value: u32) -> u32 {
    (value & GROUP_MASK) >> GROUP_SHIFT
}

pub fn library_id(value: u32) -> u32 {
    (value & GROUP_MASK) >> GROUP_SHIFT
}

/// Renders a 32-bit format id as its four characters, most significant byte first.
pub fn fourcc_to_string(value: u32) -> String {
    value.to_be_bytes().iter().map(|b| char::from(*b)).collect()
}

/// Packs a four-character code into a 32-bit id (`b0<<24 | b1<<16 | b2<<8 | b3`).
pub fn fourcc_from_str(code: &str) -> Result<u32, CoreError> {
    let bytes: Vec<u32> = code.chars().map(u32::from).collect();
    if bytes.len() != 4 || bytes.iter().any(|b| *b > 0xFF) {
        return Err(CoreError::InvalidFourcc {
            code: code.to_string(),
        });
    }
    Ok(bytes.iter().fold(0, |acc, b| (acc << 8) | b))
}
