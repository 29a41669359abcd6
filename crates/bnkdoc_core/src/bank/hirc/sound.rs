use crate::bank::Result;
use crate::bank::bytes::Cursor;
use crate::bank::hirc::{AudioProperties, DecodeOptions};

/// Plugin type carried in the low nibble of a plugin id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginType {
	/// No plugin.
	None,
	/// Audio codec.
	Codec,
	/// Source generator.
	Source,
	/// Effect.
	Effect,
	/// Motion device.
	MotionDevice,
	/// Motion source.
	MotionSource,
	/// Mixer.
	Mixer,
	/// Output sink.
	Sink,
	/// Unrecognized raw nibble.
	Other(u8),
}

impl PluginType {
	/// Extract the plugin type from a full plugin id.
	pub fn from_plugin_id(plugin_id: u32) -> Self {
		match (plugin_id & 0x0F) as u8 {
			0 => Self::None,
			1 => Self::Codec,
			2 => Self::Source,
			3 => Self::Effect,
			4 => Self::MotionDevice,
			5 => Self::MotionSource,
			6 => Self::Mixer,
			7 => Self::Sink,
			other => Self::Other(other),
		}
	}
}

/// How a sound's media is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamType {
	/// Embedded in a bank.
	Data,
	/// Streamed with an in-bank prefetch.
	PrefetchStreaming,
	/// Streamed from a loose file.
	Streaming,
	/// Unrecognized raw value.
	Other(u8),
}

impl StreamType {
	/// Map a raw stream type byte.
	pub fn from_u8(value: u8) -> Self {
		match value {
			0 => Self::Data,
			1 => Self::PrefetchStreaming,
			2 => Self::Streaming,
			other => Self::Other(other),
		}
	}
}

/// Leaf node playing one media source.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
	/// Codec or source plugin id.
	pub plugin_id: u32,
	/// Media delivery.
	pub stream_type: StreamType,
	/// Media source id.
	pub source_id: u32,
	/// Size of in-memory media.
	pub in_memory_size: u32,
	/// Raw source flag bits (bit0 language specific).
	pub source_bits: u8,
	/// Source plugin parameters, present only for source plugins.
	pub plugin_params: Option<Vec<u8>>,
	/// Base parameters.
	pub props: AudioProperties,
}

impl Sound {
	/// Decode a sound body.
	pub fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let plugin_id = cursor.read_u32_le()?;
		let stream_type = StreamType::from_u8(cursor.read_u8()?);
		let source_id = cursor.read_u32_le()?;
		let in_memory_size = cursor.read_u32_le()?;
		let source_bits = cursor.read_u8()?;

		let plugin_params = if PluginType::from_plugin_id(plugin_id) == PluginType::Source {
			let size = cursor.read_u32_le()?;
			Some(cursor.read_exact(size as usize)?.to_vec())
		} else {
			None
		};

		let props = AudioProperties::parse(cursor, opt)?;

		Ok(Self {
			plugin_id,
			stream_type,
			source_id,
			in_memory_size,
			source_bits,
			plugin_params,
			props,
		})
	}

	/// Plugin type of `plugin_id`.
	pub fn plugin_type(&self) -> PluginType {
		PluginType::from_plugin_id(self.plugin_id)
	}

	/// Whether the media depends on the active language.
	pub fn is_language_specific(&self) -> bool {
		self.source_bits & 1 != 0
	}
}
