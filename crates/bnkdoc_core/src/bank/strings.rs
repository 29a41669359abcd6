use crate::bank::Result;
use crate::bank::bytes::Cursor;

/// Decoded `STID` chunk: names of banks referenced by this bank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankStrings {
	/// Raw string table kind.
	pub string_type: u32,
	/// Bank id to name pairs, in chunk order.
	pub entries: Vec<BankName>,
}

/// One bank id and its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankName {
	/// Bank short id.
	pub bank_id: u32,
	/// Bank name.
	pub name: String,
}

impl BankStrings {
	/// Parse an `STID` payload.
	pub fn parse(payload: &[u8]) -> Result<Self> {
		Self::parse_fields(&mut Cursor::new(payload)).map_err(|err| err.into_malformed("bank strings"))
	}

	fn parse_fields(cursor: &mut Cursor<'_>) -> Result<Self> {
		let string_type = cursor.read_u32_le()?;
		let count = cursor.read_u32_le()?;
		let mut entries = Vec::new();
		for _ in 0..count {
			let bank_id = cursor.read_u32_le()?;
			let len = cursor.read_u8()?;
			let name = String::from_utf8_lossy(cursor.read_exact(usize::from(len))?).into_owned();
			entries.push(BankName { bank_id, name });
		}

		Ok(Self { string_type, entries })
	}

	/// Look up the name of a bank id.
	pub fn name_of(&self, bank_id: u32) -> Option<&str> {
		self.entries.iter().find(|entry| entry.bank_id == bank_id).map(|entry| entry.name.as_str())
	}
}
