mod action;
mod attenuation;
mod audio_props;
mod aux_sends;
mod bus;
mod container;
mod positioning;
mod props;
mod rtpc;
mod sound;
mod states;

pub use action::{Action, ActionException, ActionParams, ActiveParams, Event};
pub use attenuation::{ATTENUATION_CURVE_SLOTS, Attenuation, AttenuationCurve, Cone};
pub use audio_props::{AudioProperties, BehaviorFlags, BelowThresholdBehavior, EffectChain, EffectSlot, HdrFlags, PlaybackLimit, VirtualQueueBehavior};
pub use aux_sends::{AuxSends, USER_AUX_SEND_COUNT};
pub use bus::{Bus, DuckInfo};
pub use container::{
	ActorMixer, GroupType, Layer, LayerAssociation, LayerContainer, PlaylistItem, PlaylistMode, RandomSequenceContainer, SwitchAssignment, SwitchContainer,
	SwitchNodeParams,
};
pub use positioning::{AutomationPath, PathMode, PathPlaylistItem, PathRange, PathVertex, PositionSource, Positioning, Positioning3d};
pub use props::{PropBundle, PropValue, PropertyId, PropertyValueKind, RangedModifier, parse_ranged_modifiers};
pub use rtpc::{CurvePoint, CurveScaling, CurveShape, RtpcBinding, RtpcSource, RtpcTarget, parse_curve_points_u16, parse_curve_points_u32, parse_rtpcs};
pub use sound::{PluginType, Sound, StreamType};
pub use states::{CustomState, StateGroupBinding, SyncType, parse_state_groups};

use crate::bank::bytes::Cursor;
use crate::bank::{BankError, Result};

/// Size of the `kind u8, record_length u32` prefix of each record.
const RECORD_HEADER_SIZE: usize = 5;

/// Behavior switches for HIRC decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Error when a record decoder leaves declared bytes unread.
	pub strict_layout: bool,
	/// Maximum element count accepted for a `u16`/`u32` counted array.
	pub max_array_elems: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			strict_layout: false,
			max_array_elems: 65_536,
		}
	}
}

impl DecodeOptions {
	/// Preset that rejects records with undecoded trailing bytes.
	pub fn strict() -> Self {
		Self {
			strict_layout: true,
			..Self::default()
		}
	}
}

pub(crate) fn read_count_u16(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<usize> {
	let at = cursor.offset();
	let count = usize::from(cursor.read_u16_le()?);
	check_count(at, count, opt)
}

pub(crate) fn read_count_u32(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<usize> {
	let at = cursor.offset();
	let count = cursor.read_u32_le()? as usize;
	check_count(at, count, opt)
}

fn check_count(at: usize, count: usize, opt: &DecodeOptions) -> Result<usize> {
	if count > opt.max_array_elems {
		return Err(BankError::ArrayTooLarge {
			at,
			count,
			max: opt.max_array_elems,
		});
	}
	Ok(count)
}

/// Object type tag of a HIRC record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectKind {
	/// State property overrides.
	State,
	/// Sound.
	Sound,
	/// Action.
	Action,
	/// Event.
	Event,
	/// Random/sequence container.
	RandomSequenceContainer,
	/// Switch container.
	SwitchContainer,
	/// Actor-mixer.
	ActorMixer,
	/// Bus.
	Bus,
	/// Layer container.
	LayerContainer,
	/// Music segment.
	MusicSegment,
	/// Music track.
	MusicTrack,
	/// Music switch container.
	MusicSwitch,
	/// Music playlist container.
	MusicRandomSequence,
	/// Attenuation.
	Attenuation,
	/// Dialogue event.
	DialogueEvent,
	/// Effect share set.
	FxShareSet,
	/// Custom effect.
	FxCustom,
	/// Auxiliary bus.
	AuxBus,
	/// LFO modulator.
	Lfo,
	/// Envelope modulator.
	Envelope,
	/// Audio output device.
	AudioDevice,
	/// Time modulator.
	TimeModulator,
	/// Tag outside the known set.
	Unknown(u8),
}

impl ObjectKind {
	/// Map a raw type tag.
	pub fn from_u8(value: u8) -> Self {
		match value {
			1 => Self::State,
			2 => Self::Sound,
			3 => Self::Action,
			4 => Self::Event,
			5 => Self::RandomSequenceContainer,
			6 => Self::SwitchContainer,
			7 => Self::ActorMixer,
			8 => Self::Bus,
			9 => Self::LayerContainer,
			10 => Self::MusicSegment,
			11 => Self::MusicTrack,
			12 => Self::MusicSwitch,
			13 => Self::MusicRandomSequence,
			14 => Self::Attenuation,
			15 => Self::DialogueEvent,
			16 => Self::FxShareSet,
			17 => Self::FxCustom,
			18 => Self::AuxBus,
			19 => Self::Lfo,
			20 => Self::Envelope,
			21 => Self::AudioDevice,
			22 => Self::TimeModulator,
			other => Self::Unknown(other),
		}
	}

	/// Raw type tag.
	pub fn as_u8(self) -> u8 {
		match self {
			Self::State => 1,
			Self::Sound => 2,
			Self::Action => 3,
			Self::Event => 4,
			Self::RandomSequenceContainer => 5,
			Self::SwitchContainer => 6,
			Self::ActorMixer => 7,
			Self::Bus => 8,
			Self::LayerContainer => 9,
			Self::MusicSegment => 10,
			Self::MusicTrack => 11,
			Self::MusicSwitch => 12,
			Self::MusicRandomSequence => 13,
			Self::Attenuation => 14,
			Self::DialogueEvent => 15,
			Self::FxShareSet => 16,
			Self::FxCustom => 17,
			Self::AuxBus => 18,
			Self::Lfo => 19,
			Self::Envelope => 20,
			Self::AudioDevice => 21,
			Self::TimeModulator => 22,
			Self::Unknown(value) => value,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::State => "state",
			Self::Sound => "sound",
			Self::Action => "action",
			Self::Event => "event",
			Self::RandomSequenceContainer => "random_sequence_container",
			Self::SwitchContainer => "switch_container",
			Self::ActorMixer => "actor_mixer",
			Self::Bus => "bus",
			Self::LayerContainer => "layer_container",
			Self::MusicSegment => "music_segment",
			Self::MusicTrack => "music_track",
			Self::MusicSwitch => "music_switch",
			Self::MusicRandomSequence => "music_random_sequence",
			Self::Attenuation => "attenuation",
			Self::DialogueEvent => "dialogue_event",
			Self::FxShareSet => "fx_share_set",
			Self::FxCustom => "fx_custom",
			Self::AuxBus => "aux_bus",
			Self::Lfo => "lfo",
			Self::Envelope => "envelope",
			Self::AudioDevice => "audio_device",
			Self::TimeModulator => "time_modulator",
			Self::Unknown(_) => "unknown",
		}
	}

	/// Whether records of this kind get a structural decoder.
	pub fn is_decoded(self) -> bool {
		matches!(
			self,
			Self::State
				| Self::Sound
				| Self::Action
				| Self::Event
				| Self::RandomSequenceContainer
				| Self::SwitchContainer
				| Self::ActorMixer
				| Self::Bus
				| Self::LayerContainer
				| Self::Attenuation
				| Self::AuxBus
		)
	}
}

/// Type-specific payload of a HIRC record.
#[derive(Debug, Clone, PartialEq)]
pub enum HircBody {
	/// State property overrides.
	State(PropBundle),
	/// Sound.
	Sound(Sound),
	/// Action.
	Action(Action),
	/// Event.
	Event(Event),
	/// Random/sequence container.
	RandomSequenceContainer(RandomSequenceContainer),
	/// Switch container.
	SwitchContainer(SwitchContainer),
	/// Actor-mixer.
	ActorMixer(ActorMixer),
	/// Bus or aux bus.
	Bus(Bus),
	/// Layer container.
	LayerContainer(LayerContainer),
	/// Attenuation.
	Attenuation(Attenuation),
	/// Undecoded body bytes (everything after the id), kept verbatim.
	Opaque(Vec<u8>),
}

/// One decoded HIRC record.
#[derive(Debug, Clone, PartialEq)]
pub struct HircObject {
	/// Object type tag.
	pub kind: ObjectKind,
	/// Object id.
	pub id: u32,
	/// Offset of the record's type tag within the chunk payload.
	pub offset: usize,
	/// Declared record length (id plus body).
	pub declared_len: u32,
	/// Decoded body.
	pub body: HircBody,
	/// Declared bytes left unread by the body decoder.
	pub trailing: Vec<u8>,
}

impl HircObject {
	/// Shared base parameters for actor-mixer hierarchy nodes.
	pub fn audio_properties(&self) -> Option<&AudioProperties> {
		match &self.body {
			HircBody::Sound(item) => Some(&item.props),
			HircBody::RandomSequenceContainer(item) => Some(&item.props),
			HircBody::SwitchContainer(item) => Some(&item.props),
			HircBody::ActorMixer(item) => Some(&item.props),
			HircBody::LayerContainer(item) => Some(&item.props),
			_ => None,
		}
	}

	/// Bus body for bus and aux bus records.
	pub fn as_bus(&self) -> Option<&Bus> {
		match &self.body {
			HircBody::Bus(bus) => Some(bus),
			_ => None,
		}
	}

	/// Declared parent: the node parent for hierarchy nodes, the parent bus for
	/// buses, `0` for everything else.
	pub fn parent_id(&self) -> u32 {
		if let Some(props) = self.audio_properties() {
			return props.parent_id;
		}
		self.as_bus().map_or(0, |bus| bus.parent_bus_id)
	}

	/// Child ids listed by containers, empty otherwise.
	pub fn children(&self) -> &[u32] {
		match &self.body {
			HircBody::RandomSequenceContainer(item) => &item.children,
			HircBody::SwitchContainer(item) => &item.children,
			HircBody::ActorMixer(item) => &item.children,
			HircBody::LayerContainer(item) => &item.children,
			_ => &[],
		}
	}

	/// Raw body bytes of records without a structural decoder.
	pub fn opaque_bytes(&self) -> Option<&[u8]> {
		match &self.body {
			HircBody::Opaque(bytes) => Some(bytes),
			_ => None,
		}
	}
}

/// Decoded `HIRC` chunk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HircChunk {
	/// Records in chunk order.
	pub objects: Vec<HircObject>,
}

impl HircChunk {
	/// Decode every record of a `HIRC` payload.
	pub fn parse(payload: &[u8], opt: &DecodeOptions) -> Result<Self> {
		let mut cursor = Cursor::new(payload);
		let count = cursor.read_u32_le().map_err(|err| err.into_truncated_record(0, None))? as usize;

		let mut objects = Vec::with_capacity(count.min(cursor.remaining() / (RECORD_HEADER_SIZE + 4)));
		for index in 0..count {
			objects.push(parse_record(&mut cursor, index, opt)?);
		}

		Ok(Self { objects })
	}

	/// First record with `id`.
	pub fn get(&self, id: u32) -> Option<&HircObject> {
		self.objects.iter().find(|object| object.id == id)
	}

	/// Records of one kind, in chunk order.
	pub fn of_kind(&self, kind: ObjectKind) -> impl Iterator<Item = &HircObject> + '_ {
		self.objects.iter().filter(move |object| object.kind == kind)
	}

	/// Bus and aux bus records.
	pub fn buses(&self) -> impl Iterator<Item = &HircObject> + '_ {
		self.objects.iter().filter(|object| object.as_bus().is_some())
	}

	/// Number of records.
	pub fn len(&self) -> usize {
		self.objects.len()
	}

	/// Whether the chunk holds no records.
	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}
}

fn parse_record(cursor: &mut Cursor<'_>, index: usize, opt: &DecodeOptions) -> Result<HircObject> {
	let offset = cursor.offset();
	let kind = ObjectKind::from_u8(cursor.read_u8().map_err(|err| err.into_truncated_record(index, None))?);
	let declared_len = cursor.read_u32_le().map_err(|err| err.into_truncated_record(index, None))?;

	let rem = cursor.remaining();
	if declared_len as usize > rem {
		return Err(BankError::TruncatedRecord {
			index,
			id: None,
			at: cursor.offset(),
			need: declared_len as usize,
			rem,
		});
	}
	if (declared_len as usize) < 4 {
		return Err(BankError::OverrunRecord {
			index,
			id: None,
			declared: declared_len,
			consumed: 4,
		});
	}

	let mut record = cursor.sub_cursor(declared_len as usize)?;
	let id = record.read_u32_le()?;
	let body = parse_body(kind, &mut record, opt).map_err(|err| err.into_truncated_record(index, Some(id)))?;

	let trailing = record.read_rest();
	if opt.strict_layout && !trailing.is_empty() {
		return Err(BankError::RecordUnderrun {
			id,
			kind: kind.as_u8(),
			leftover: trailing.len(),
		});
	}

	Ok(HircObject {
		kind,
		id,
		offset,
		declared_len,
		body,
		trailing: trailing.to_vec(),
	})
}

fn parse_body(kind: ObjectKind, cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<HircBody> {
	Ok(match kind {
		ObjectKind::State => HircBody::State(PropBundle::parse(cursor)?),
		ObjectKind::Sound => HircBody::Sound(Sound::parse(cursor, opt)?),
		ObjectKind::Action => HircBody::Action(Action::parse(cursor, opt)?),
		ObjectKind::Event => HircBody::Event(Event::parse(cursor, opt)?),
		ObjectKind::RandomSequenceContainer => HircBody::RandomSequenceContainer(RandomSequenceContainer::parse(cursor, opt)?),
		ObjectKind::SwitchContainer => HircBody::SwitchContainer(SwitchContainer::parse(cursor, opt)?),
		ObjectKind::ActorMixer => HircBody::ActorMixer(ActorMixer::parse(cursor, opt)?),
		ObjectKind::Bus | ObjectKind::AuxBus => HircBody::Bus(Bus::parse(cursor, opt)?),
		ObjectKind::LayerContainer => HircBody::LayerContainer(LayerContainer::parse(cursor, opt)?),
		ObjectKind::Attenuation => HircBody::Attenuation(Attenuation::parse(cursor, opt)?),
		_ => HircBody::Opaque(cursor.read_rest().to_vec()),
	})
}

#[cfg(test)]
mod tests;
