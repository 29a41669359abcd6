use std::fmt;

use crate::bank::bytes::Cursor;
use crate::bank::{BankError, Result};

/// Size of a chunk header (`tag` plus `length`).
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Opaque four-byte chunk identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkTag(pub [u8; 4]);

impl ChunkTag {
	/// Bank header.
	pub const BKHD: Self = Self(*b"BKHD");
	/// Hierarchy objects.
	pub const HIRC: Self = Self(*b"HIRC");
	/// Global game state settings.
	pub const STMG: Self = Self(*b"STMG");
	/// Embedded media index.
	pub const DIDX: Self = Self(*b"DIDX");
	/// Embedded media payloads.
	pub const DATA: Self = Self(*b"DATA");
	/// Bank name string table.
	pub const STID: Self = Self(*b"STID");
	/// Plugin initialization list.
	pub const INIT: Self = Self(*b"INIT");
	/// Environment settings.
	pub const ENVS: Self = Self(*b"ENVS");
	/// Target platform name.
	pub const PLAT: Self = Self(*b"PLAT");

	/// Build a tag from its little-endian 32-bit form.
	pub fn from_u32(value: u32) -> Self {
		Self(value.to_le_bytes())
	}

	/// Return the tag as a little-endian 32-bit identifier.
	pub fn as_u32(self) -> u32 {
		u32::from_le_bytes(self.0)
	}

	/// Parse an up-to-4 ASCII tag, padding short input with zero bytes.
	pub fn parse(tag: &str) -> Result<Self> {
		if tag.is_empty() || tag.len() > 4 || !tag.is_ascii() {
			return Err(BankError::InvalidChunkTag { tag: tag.to_owned() });
		}

		let mut out = [0_u8; 4];
		out[..tag.len()].copy_from_slice(tag.as_bytes());
		Ok(Self(out))
	}
}

impl fmt::Display for ChunkTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for byte in self.0 {
			if byte.is_ascii_graphic() || byte == b' ' {
				write!(f, "{}", char::from(byte))?;
			} else {
				write!(f, "\\x{byte:02x}")?;
			}
		}
		Ok(())
	}
}

/// One tagged, length-prefixed section of the container.
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
	/// Chunk identifier.
	pub tag: ChunkTag,
	/// Offset of the chunk header in the container.
	pub offset: usize,
	/// Payload bytes, exactly as long as the declared length.
	pub payload: &'a [u8],
}

/// Iterator over the chunks of a container, in file order.
///
/// Stops after yielding the first error.
pub struct ChunkIter<'a> {
	cursor: Cursor<'a>,
	done: bool,
}

impl<'a> ChunkIter<'a> {
	/// Iterate chunks starting at the beginning of `bytes`.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			done: false,
		}
	}
}

impl<'a> Iterator for ChunkIter<'a> {
	type Item = Result<Chunk<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.cursor.remaining() == 0 {
			self.done = true;
			return None;
		}

		let offset = self.cursor.offset();
		let rem = self.cursor.remaining();
		if rem < CHUNK_HEADER_SIZE {
			self.done = true;
			let mut tag = [0_u8; 4];
			let partial = self.cursor.read_rest();
			let take = partial.len().min(4);
			tag[..take].copy_from_slice(&partial[..take]);
			return Some(Err(BankError::TruncatedContainer {
				tag: ChunkTag(tag),
				at: offset,
				len: CHUNK_HEADER_SIZE as u64,
				rem,
			}));
		}

		let header = self.cursor.read_code4().and_then(|tag| Ok((ChunkTag(tag), self.cursor.read_u32_le()?)));
		let (tag, len) = match header {
			Ok(value) => value,
			Err(err) => {
				self.done = true;
				return Some(Err(err));
			}
		};

		let rem = self.cursor.remaining();
		let payload_len = len as usize;
		if payload_len > rem {
			self.done = true;
			return Some(Err(BankError::TruncatedContainer {
				tag,
				at: offset,
				len: u64::from(len),
				rem,
			}));
		}

		let payload = match self.cursor.read_exact(payload_len) {
			Ok(value) => value,
			Err(err) => {
				self.done = true;
				return Some(Err(err));
			}
		};

		Some(Ok(Chunk { tag, offset, payload }))
	}
}

/// Return the first chunk carrying `tag`.
///
/// Chunks after the match are not visited, so damage past it goes unnoticed.
pub fn find_chunk(bytes: &[u8], tag: ChunkTag) -> Result<Option<Chunk<'_>>> {
	for chunk in ChunkIter::new(bytes) {
		let chunk = chunk?;
		if chunk.tag == tag {
			return Ok(Some(chunk));
		}
	}
	Ok(None)
}
