use crate::bank::bytes::Cursor;
use crate::bank::{BankError, Result};

const ENTRY_SIZE: usize = 12;

/// Decoded `DIDX` chunk: where each embedded media payload lives inside `DATA`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaIndex {
	/// Entries in chunk order.
	pub entries: Vec<MediaEntry>,
}

/// Location of one embedded media payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaEntry {
	/// Media (source) id.
	pub media_id: u32,
	/// Offset within the `DATA` payload.
	pub offset: u32,
	/// Payload size in bytes.
	pub size: u32,
}

impl MediaIndex {
	/// Parse a `DIDX` payload.
	pub fn parse(payload: &[u8]) -> Result<Self> {
		if payload.len() % ENTRY_SIZE != 0 {
			return Err(BankError::MisalignedMediaIndex { len: payload.len() });
		}

		let mut cursor = Cursor::new(payload);
		let mut entries = Vec::with_capacity(payload.len() / ENTRY_SIZE);
		while !cursor.is_empty() {
			let entry = MediaEntry {
				media_id: cursor.read_u32_le()?,
				offset: cursor.read_u32_le()?,
				size: cursor.read_u32_le()?,
			};
			entries.push(entry);
		}

		Ok(Self { entries })
	}

	/// Look up the entry for a media id.
	pub fn get(&self, media_id: u32) -> Option<&MediaEntry> {
		self.entries.iter().find(|entry| entry.media_id == media_id)
	}
}
