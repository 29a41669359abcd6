//! Shared test helpers for workspace crates: little-endian byte builders for
//! synthetic SoundBank containers and HIRC records.

use std::path::PathBuf;

/// Object kind tags used by the canned record builders.
pub mod kind {
	/// State object.
	pub const STATE: u8 = 1;
	/// Sound object.
	pub const SOUND: u8 = 2;
	/// Action object.
	pub const ACTION: u8 = 3;
	/// Event object.
	pub const EVENT: u8 = 4;
	/// Random/sequence container.
	pub const RANDOM_SEQUENCE: u8 = 5;
	/// Switch container.
	pub const SWITCH: u8 = 6;
	/// Actor-mixer.
	pub const ACTOR_MIXER: u8 = 7;
	/// Bus.
	pub const BUS: u8 = 8;
	/// Layer container.
	pub const LAYER: u8 = 9;
	/// Attenuation.
	pub const ATTENUATION: u8 = 14;
	/// Auxiliary bus.
	pub const AUX_BUS: u8 = 18;
}

/// Append-only little-endian writer.
#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
	bytes: Vec<u8>,
}

impl ByteWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append one byte.
	pub fn u8(&mut self, value: u8) -> &mut Self {
		self.bytes.push(value);
		self
	}

	/// Append one signed byte.
	pub fn i8(&mut self, value: i8) -> &mut Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a little-endian `u16`.
	pub fn u16(&mut self, value: u16) -> &mut Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a little-endian `u32`.
	pub fn u32(&mut self, value: u32) -> &mut Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a little-endian `i32`.
	pub fn i32(&mut self, value: i32) -> &mut Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a little-endian `f32`.
	pub fn f32(&mut self, value: f32) -> &mut Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a four-byte tag.
	pub fn tag(&mut self, tag: [u8; 4]) -> &mut Self {
		self.bytes.extend_from_slice(&tag);
		self
	}

	/// Append raw bytes.
	pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Number of bytes written so far.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Whether nothing was written yet.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Finish and return the written bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}
}

/// Encode one chunk: `tag`, `u32` length, payload.
pub fn chunk(tag: [u8; 4], payload: &[u8]) -> Vec<u8> {
	let mut writer = ByteWriter::new();
	writer.tag(tag).u32(payload.len() as u32).bytes(payload);
	writer.into_bytes()
}

/// Encode a container from `(tag, payload)` pairs in order.
pub fn container(chunks: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
	let mut out = Vec::new();
	for (tag, payload) in chunks {
		out.extend_from_slice(&chunk(*tag, payload));
	}
	out
}

/// Encode a `BKHD` payload.
pub fn header_payload(version: u32, bank_id: u32) -> Vec<u8> {
	let mut writer = ByteWriter::new();
	writer.u32(version).u32(bank_id);
	writer.into_bytes()
}

/// Encode one HIRC record: kind, record length (id + body), id, body.
pub fn hirc_record(kind: u8, id: u32, body: &[u8]) -> Vec<u8> {
	let mut writer = ByteWriter::new();
	writer.u8(kind).u32(body.len() as u32 + 4).u32(id).bytes(body);
	writer.into_bytes()
}

/// Encode a HIRC payload from encoded records.
pub fn hirc_payload(records: &[Vec<u8>]) -> Vec<u8> {
	let mut writer = ByteWriter::new();
	writer.u32(records.len() as u32);
	for record in records {
		writer.bytes(record);
	}
	writer.into_bytes()
}

/// Encode an audio properties block with every optional section absent.
pub fn plain_audio_properties(parent_id: u32, output_bus_id: u32) -> Vec<u8> {
	let mut writer = ByteWriter::new();
	writer
		// effects: no override, no effects
		.u8(0)
		.u8(0)
		.u32(output_bus_id)
		.u32(parent_id)
		// behavior bits, props, ranged modifiers
		.u8(0)
		.u8(0)
		.u8(0)
		// positioning, aux sends
		.u8(0)
		.u8(0)
		// playback limit
		.u8(0)
		.u8(0)
		.u16(0)
		.u8(0)
		// hdr
		.u8(0)
		// state groups, rtpcs
		.u32(0)
		.u16(0);
	writer.into_bytes()
}

/// Encode an actor-mixer body.
pub fn actor_mixer_body(parent_id: u32, children: &[u32]) -> Vec<u8> {
	let mut writer = ByteWriter::new();
	writer.bytes(&plain_audio_properties(parent_id, 0)).u32(children.len() as u32);
	for child in children {
		writer.u32(*child);
	}
	writer.into_bytes()
}

/// Encode an in-memory sound body using a codec plugin.
pub fn sound_body(parent_id: u32, source_id: u32) -> Vec<u8> {
	let mut writer = ByteWriter::new();
	writer
		.u32(0x0004_0001)
		.u8(0)
		.u32(source_id)
		.u32(1024)
		.u8(0)
		.bytes(&plain_audio_properties(parent_id, 0));
	writer.into_bytes()
}

/// Encode a bus body with every optional section absent.
pub fn bus_body(parent_bus_id: u32) -> Vec<u8> {
	let mut writer = ByteWriter::new();
	writer
		.u32(parent_bus_id)
		// props, positioning, aux sends
		.u8(0)
		.u8(0)
		.u8(0)
		// bus bits, max instances, channel config
		.u8(0)
		.u16(0)
		.u32(0)
		// hdr bits, recovery time, max duck volume
		.u8(0)
		.i32(0)
		.f32(0.0)
		// ducks
		.u32(0)
		// effects
		.u8(0)
		.u8(0)
		// rtpcs, state groups
		.u16(0)
		.u32(0);
	writer.into_bytes()
}

/// Write `bytes` to a unique file under the system temp directory.
pub fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("bnkdoc-test-{}", std::process::id()));
	std::fs::create_dir_all(&dir).unwrap_or_else(|err| panic!("create {}: {err}", dir.display()));
	let path = dir.join(name);
	std::fs::write(&path, bytes).unwrap_or_else(|err| panic!("write {}: {err}", path.display()));
	path
}
