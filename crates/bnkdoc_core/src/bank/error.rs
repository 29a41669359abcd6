use thiserror::Error;

use crate::bank::ChunkTag;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BankError>;

/// Errors produced while scanning, decoding, and linking SoundBank data.
#[derive(Debug, Error)]
pub enum BankError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Chunk header or payload would exceed remaining container data.
	#[error("chunk {tag} at offset {at} declares {len} bytes, remaining {rem}")]
	TruncatedContainer {
		/// Tag of the offending chunk, or of the partial header bytes.
		tag: ChunkTag,
		/// Chunk header offset in the container.
		at: usize,
		/// Declared payload length.
		len: u64,
		/// Bytes remaining after the header.
		rem: usize,
	},
	/// A HIRC record, or a field inside it, runs past the available bytes.
	#[error("truncated record #{index} (id={id:?}) at offset {at}: need {need} bytes, remaining {rem}")]
	TruncatedRecord {
		/// Position of the record in the chunk.
		index: usize,
		/// Object id when the record header got far enough to read it.
		id: Option<u32>,
		/// Chunk-relative offset of the failed read.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available within the record or chunk.
		rem: usize,
	},
	/// A record decoder consumed more bytes than the record declared.
	#[error("record #{index} (id={id:?}) overran its declared length: declared={declared}, consumed={consumed}")]
	OverrunRecord {
		/// Position of the record in the chunk.
		index: usize,
		/// Object id, absent when the declared length cannot even hold it.
		id: Option<u32>,
		/// Declared record length, including the id.
		declared: u32,
		/// Bytes consumed, including the id.
		consumed: u64,
	},
	/// Strict layout mode detected trailing undecoded bytes in a record.
	#[error("record {id} (kind={kind}) left {leftover} bytes undecoded")]
	RecordUnderrun {
		/// Object id.
		id: u32,
		/// Raw object kind tag.
		kind: u8,
		/// Unconsumed bytes.
		leftover: usize,
	},
	/// Fixed-layout chunk ran out of bytes before all fields were read.
	#[error("malformed {section} at offset {at}: need {need} bytes, remaining {rem}")]
	MalformedRecord {
		/// Logical section being decoded.
		section: &'static str,
		/// Payload offset of the failed read.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Media index payload is not a whole number of entries.
	#[error("media index length {len} is not a multiple of 12")]
	MisalignedMediaIndex {
		/// Payload length.
		len: usize,
	},
	/// Array count exceeded configured limit.
	#[error("array too large at offset {at}: count={count}, max={max}")]
	ArrayTooLarge {
		/// Offset of the count field.
		at: usize,
		/// Declared element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// Chunk tag exists but has no structural decoder.
	#[error("no structural decoder for chunk {tag}")]
	UnimplementedChunkType {
		/// Chunk tag.
		tag: ChunkTag,
	},
	/// Requested chunk is not present in the container.
	#[error("chunk not found: {tag}")]
	ChunkNotFound {
		/// Chunk tag.
		tag: ChunkTag,
	},
	/// Hierarchy builder was asked to link twice.
	#[error("hierarchy already built")]
	AlreadyBuilt,
	/// Well-known master bus id was not found exactly once among root buses.
	#[error("well-known root bus {id} found {found} times among root buses (expected 1)")]
	AmbiguousOrMissingRoot {
		/// Well-known bus id.
		id: u32,
		/// Number of root buses carrying that id.
		found: usize,
	},
	/// CLI chunk tag argument was invalid.
	#[error("invalid chunk tag: {tag}")]
	InvalidChunkTag {
		/// User-provided tag string.
		tag: String,
	},
	/// CLI object id argument was invalid.
	#[error("invalid object id: {value}")]
	InvalidObjectId {
		/// User-provided id string.
		value: String,
	},
}

impl BankError {
	/// Attach record context to a cursor-level EOF.
	pub(crate) fn into_truncated_record(self, index: usize, id: Option<u32>) -> Self {
		match self {
			Self::UnexpectedEof { at, need, rem } => Self::TruncatedRecord { index, id, at, need, rem },
			other => other,
		}
	}

	/// Attach section context to a cursor-level EOF.
	pub(crate) fn into_malformed(self, section: &'static str) -> Self {
		match self {
			Self::UnexpectedEof { at, need, rem } => Self::MalformedRecord { section, at, need, rem },
			other => other,
		}
	}
}
