use crate::bank::Result;
use crate::bank::bytes::Cursor;

/// Decoded `BKHD` chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankHeader {
	/// Bank format version.
	pub version: u32,
	/// Short id of this bank.
	pub bank_id: u32,
	/// Bytes following the fixed fields, kept verbatim.
	pub extra: Vec<u8>,
}

impl BankHeader {
	/// Number of bytes occupied by the fixed fields.
	pub const MIN_SIZE: usize = 8;

	/// Parse a header from a `BKHD` payload.
	pub fn parse(payload: &[u8]) -> Result<Self> {
		Self::parse_fields(&mut Cursor::new(payload)).map_err(|err| err.into_malformed("bank header"))
	}

	fn parse_fields(cursor: &mut Cursor<'_>) -> Result<Self> {
		let version = cursor.read_u32_le()?;
		let bank_id = cursor.read_u32_le()?;
		let extra = cursor.read_rest().to_vec();
		Ok(Self { version, bank_id, extra })
	}
}
