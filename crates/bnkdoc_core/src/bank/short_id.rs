const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Derive the 32-bit id the format assigns to a named object.
///
/// FNV-1 (multiply, then xor) over the ASCII-lowercased name bytes.
pub fn short_id(name: &str) -> u32 {
	name.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| hash.wrapping_mul(FNV_PRIME) ^ u32::from(byte.to_ascii_lowercase()))
}
