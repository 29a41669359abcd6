use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::bank::{
	BankError, BankHeader, BankStrings, ChunkIter, ChunkTag, DecodeOptions, GameState, HircChunk, MediaEntry, MediaIndex, Result, find_chunk,
};

/// Decode context over one SoundBank container.
///
/// Chunks are located on first request and decoded sections are cached per
/// tag for the lifetime of the context. Decoding takes `&mut self`, so first
/// use of a tag is serialized by the borrow checker; independent contexts
/// share nothing and can live on separate threads.
pub struct SoundBank {
	bytes: Vec<u8>,
	options: DecodeOptions,
	sections: HashMap<ChunkTag, DecodedSection>,
}

/// A structurally decoded chunk.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedSection {
	/// `BKHD`.
	Header(BankHeader),
	/// `HIRC`.
	Hierarchy(HircChunk),
	/// `STMG`.
	GameState(GameState),
	/// `DIDX`.
	MediaIndex(MediaIndex),
	/// `STID`.
	Strings(BankStrings),
}

impl DecodedSection {
	/// Decode `payload` according to `tag`.
	pub fn decode(tag: ChunkTag, payload: &[u8], options: &DecodeOptions) -> Result<Self> {
		match tag {
			ChunkTag::BKHD => Ok(Self::Header(BankHeader::parse(payload)?)),
			ChunkTag::HIRC => Ok(Self::Hierarchy(HircChunk::parse(payload, options)?)),
			ChunkTag::STMG => Ok(Self::GameState(GameState::parse(payload)?)),
			ChunkTag::DIDX => Ok(Self::MediaIndex(MediaIndex::parse(payload)?)),
			ChunkTag::STID => Ok(Self::Strings(BankStrings::parse(payload)?)),
			_ => Err(BankError::UnimplementedChunkType { tag }),
		}
	}

	/// Whether `tag` has a structural decoder.
	pub fn is_supported(tag: ChunkTag) -> bool {
		matches!(tag, ChunkTag::BKHD | ChunkTag::HIRC | ChunkTag::STMG | ChunkTag::DIDX | ChunkTag::STID)
	}

	fn as_header(&self) -> Option<&BankHeader> {
		match self {
			Self::Header(value) => Some(value),
			_ => None,
		}
	}

	fn as_hierarchy(&self) -> Option<&HircChunk> {
		match self {
			Self::Hierarchy(value) => Some(value),
			_ => None,
		}
	}

	fn as_game_state(&self) -> Option<&GameState> {
		match self {
			Self::GameState(value) => Some(value),
			_ => None,
		}
	}

	fn as_media_index(&self) -> Option<&MediaIndex> {
		match self {
			Self::MediaIndex(value) => Some(value),
			_ => None,
		}
	}

	fn as_strings(&self) -> Option<&BankStrings> {
		match self {
			Self::Strings(value) => Some(value),
			_ => None,
		}
	}
}

impl SoundBank {
	/// Read a bank from disk. The file is read once, up front.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		Ok(Self::from_bytes(bytes))
	}

	/// Wrap bytes already in memory.
	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self {
			bytes,
			options: DecodeOptions::default(),
			sections: HashMap::new(),
		}
	}

	/// Replace decode options. Previously cached sections are dropped.
	pub fn with_options(mut self, options: DecodeOptions) -> Self {
		self.options = options;
		self.sections.clear();
		self
	}

	/// Active decode options.
	pub fn options(&self) -> &DecodeOptions {
		&self.options
	}

	/// Raw container bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Iterate every chunk in file order.
	pub fn chunks(&self) -> ChunkIter<'_> {
		ChunkIter::new(&self.bytes)
	}

	/// Payload of the first chunk carrying `tag`.
	pub fn read_chunk(&self, tag: ChunkTag) -> Result<Option<&[u8]>> {
		Ok(find_chunk(&self.bytes, tag)?.map(|chunk| chunk.payload))
	}

	/// Payload of the first chunk carrying `tag`, or `ChunkNotFound`.
	pub fn require_chunk(&self, tag: ChunkTag) -> Result<&[u8]> {
		self.read_chunk(tag)?.ok_or(BankError::ChunkNotFound { tag })
	}

	/// Decode the first chunk carrying `tag`, caching the result.
	///
	/// Returns `None` when the tag is absent and `UnimplementedChunkType` when
	/// it is present without a structural decoder. Failed decodes are not
	/// cached.
	pub fn decode_chunk(&mut self, tag: ChunkTag) -> Result<Option<&DecodedSection>> {
		if !self.sections.contains_key(&tag) {
			let Some(payload) = self.read_chunk(tag)? else {
				return Ok(None);
			};
			let section = DecodedSection::decode(tag, payload, &self.options)?;
			self.sections.insert(tag, section);
		}
		Ok(self.sections.get(&tag))
	}

	/// Whether `tag` was already decoded and cached.
	pub fn is_cached(&self, tag: ChunkTag) -> bool {
		self.sections.contains_key(&tag)
	}

	/// Decoded `BKHD`.
	pub fn header(&mut self) -> Result<Option<&BankHeader>> {
		Ok(self.decode_chunk(ChunkTag::BKHD)?.and_then(DecodedSection::as_header))
	}

	/// Decoded `HIRC`.
	pub fn hierarchy(&mut self) -> Result<Option<&HircChunk>> {
		Ok(self.decode_chunk(ChunkTag::HIRC)?.and_then(DecodedSection::as_hierarchy))
	}

	/// Decoded `STMG`.
	pub fn game_state(&mut self) -> Result<Option<&GameState>> {
		Ok(self.decode_chunk(ChunkTag::STMG)?.and_then(DecodedSection::as_game_state))
	}

	/// Decoded `DIDX`.
	pub fn media_index(&mut self) -> Result<Option<&MediaIndex>> {
		Ok(self.decode_chunk(ChunkTag::DIDX)?.and_then(DecodedSection::as_media_index))
	}

	/// Decoded `STID`.
	pub fn strings(&mut self) -> Result<Option<&BankStrings>> {
		Ok(self.decode_chunk(ChunkTag::STID)?.and_then(DecodedSection::as_strings))
	}

	/// Raw bytes of one embedded media payload, located through `DIDX` inside `DATA`.
	pub fn embedded_media(&mut self, media_id: u32) -> Result<Option<&[u8]>> {
		let Some(entry) = self.media_index()?.and_then(|index| index.get(media_id)).copied() else {
			return Ok(None);
		};
		let data = self.require_chunk(ChunkTag::DATA)?;
		slice_media(data, entry).map(Some)
	}

	/// Scan chunk distribution statistics.
	pub fn scan_chunk_stats(&self) -> Result<ChunkStats> {
		let mut stats = ChunkStats::default();
		for chunk in self.chunks() {
			let chunk = chunk?;
			stats.chunk_count += 1;
			stats.payload_bytes += chunk.payload.len() as u64;
			stats.last_tag = Some(chunk.tag);
			let count = stats.tags.entry(chunk.tag).or_insert(0);
			if *count == 0 {
				stats.order.push(chunk.tag);
			}
			*count += 1;
		}
		Ok(stats)
	}
}

fn slice_media(data: &[u8], entry: MediaEntry) -> Result<&[u8]> {
	let start = entry.offset as usize;
	let size = entry.size as usize;
	data.get(start..).and_then(|rest| rest.get(..size)).ok_or(BankError::MalformedRecord {
		section: "embedded media",
		at: start,
		need: size,
		rem: data.len().saturating_sub(start),
	})
}

/// Aggregate chunk-level counts from a linear scan.
#[derive(Debug, Clone, Default)]
pub struct ChunkStats {
	/// Number of chunks.
	pub chunk_count: u32,
	/// Sum of payload lengths.
	pub payload_bytes: u64,
	/// Tag of the final chunk visited.
	pub last_tag: Option<ChunkTag>,
	/// Distinct tags in first-seen order.
	pub order: Vec<ChunkTag>,
	/// Frequency table by tag.
	pub tags: HashMap<ChunkTag, u32>,
}

impl ChunkStats {
	/// Tags seen more than once, in first-seen order. Lookups only ever see the first.
	pub fn duplicates(&self) -> Vec<ChunkTag> {
		self.order.iter().copied().filter(|tag| self.tags.get(tag).is_some_and(|count| *count > 1)).collect()
	}
}
