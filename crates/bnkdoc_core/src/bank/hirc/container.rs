use crate::bank::Result;
use crate::bank::bytes::Cursor;
use crate::bank::hirc::{AudioProperties, CurvePoint, DecodeOptions, RtpcBinding, parse_curve_points_u32, parse_rtpcs, read_count_u16, read_count_u32};

/// Read a `count u32` child id list.
pub fn parse_children(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Vec<u32>> {
	let count = read_count_u32(cursor, opt)?;
	let mut ids = Vec::with_capacity(count);
	for _ in 0..count {
		ids.push(cursor.read_u32_le()?);
	}
	Ok(ids)
}

/// Grouping node without playback logic of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorMixer {
	/// Base parameters.
	pub props: AudioProperties,
	/// Child node ids.
	pub children: Vec<u32>,
}

impl ActorMixer {
	/// Decode an actor-mixer body.
	pub fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let props = AudioProperties::parse(cursor, opt)?;
		let children = parse_children(cursor, opt)?;
		Ok(Self { props, children })
	}
}

/// Whether a random/sequence container shuffles or steps through its playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistMode {
	/// Random pick.
	Random,
	/// Fixed order.
	Sequence,
	/// Unrecognized raw value.
	Other(u8),
}

/// Container playing its children at random or in sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomSequenceContainer {
	/// Base parameters.
	pub props: AudioProperties,
	/// Loop count, `0` for infinite.
	pub loop_count: u16,
	/// Loop count randomization minimum.
	pub loop_mod_min: u16,
	/// Loop count randomization maximum.
	pub loop_mod_max: u16,
	/// Transition time (seconds).
	pub transition_time: f32,
	/// Transition time randomization minimum.
	pub transition_mod_min: f32,
	/// Transition time randomization maximum.
	pub transition_mod_max: f32,
	/// Number of recent items excluded from random picks.
	pub avoid_repeat_count: u16,
	/// Raw transition mode.
	pub transition_mode: u8,
	/// Raw random mode (standard or shuffle).
	pub random_mode: u8,
	/// Playlist mode.
	pub mode: PlaylistMode,
	/// Pick probabilities use item weights.
	pub using_weight: bool,
	/// Restart the playlist on each play.
	pub reset_playlist_at_each_play: bool,
	/// Sequence restarts backward at the end.
	pub restart_backward: bool,
	/// Plays the whole playlist continuously.
	pub continuous: bool,
	/// Playlist position is shared by all game objects.
	pub global: bool,
	/// Child node ids.
	pub children: Vec<u32>,
	/// Playlist items.
	pub playlist: Vec<PlaylistItem>,
}

/// One playlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistItem {
	/// Child id to play.
	pub item_id: u32,
	/// Random pick weight.
	pub weight: i32,
}

impl RandomSequenceContainer {
	/// Decode a random/sequence container body.
	pub fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let props = AudioProperties::parse(cursor, opt)?;
		let loop_count = cursor.read_u16_le()?;
		let loop_mod_min = cursor.read_u16_le()?;
		let loop_mod_max = cursor.read_u16_le()?;
		let transition_time = cursor.read_f32_le()?;
		let transition_mod_min = cursor.read_f32_le()?;
		let transition_mod_max = cursor.read_f32_le()?;
		let avoid_repeat_count = cursor.read_u16_le()?;
		let transition_mode = cursor.read_u8()?;
		let random_mode = cursor.read_u8()?;
		let mode = match cursor.read_u8()? {
			0 => PlaylistMode::Random,
			1 => PlaylistMode::Sequence,
			other => PlaylistMode::Other(other),
		};
		let bits = cursor.read_u8()?;
		let children = parse_children(cursor, opt)?;

		let count = read_count_u16(cursor, opt)?;
		let mut playlist = Vec::with_capacity(count);
		for _ in 0..count {
			playlist.push(PlaylistItem {
				item_id: cursor.read_u32_le()?,
				weight: cursor.read_i32_le()?,
			});
		}

		Ok(Self {
			props,
			loop_count,
			loop_mod_min,
			loop_mod_max,
			transition_time,
			transition_mod_min,
			transition_mod_max,
			avoid_repeat_count,
			transition_mode,
			random_mode,
			mode,
			using_weight: bits & (1 << 0) != 0,
			reset_playlist_at_each_play: bits & (1 << 1) != 0,
			restart_backward: bits & (1 << 2) != 0,
			continuous: bits & (1 << 3) != 0,
			global: bits & (1 << 4) != 0,
			children,
			playlist,
		})
	}
}

/// Kind of group a switch container follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
	/// Switch group.
	Switch,
	/// State group.
	State,
	/// Unrecognized raw value.
	Other(u8),
}

/// Container selecting children by the current switch or state.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchContainer {
	/// Base parameters.
	pub props: AudioProperties,
	/// Group kind.
	pub group_type: GroupType,
	/// Switch or state group id.
	pub group_id: u32,
	/// Switch used when none is set.
	pub default_switch: u32,
	/// Re-evaluate the switch while playing.
	pub continuous_validation: bool,
	/// Child node ids.
	pub children: Vec<u32>,
	/// Children assigned to each switch.
	pub switches: Vec<SwitchAssignment>,
	/// Per-child switching behavior.
	pub params: Vec<SwitchNodeParams>,
}

/// Children played for one switch value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchAssignment {
	/// Switch id.
	pub switch_id: u32,
	/// Node ids.
	pub node_ids: Vec<u32>,
}

/// Switching behavior of one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchNodeParams {
	/// Child node id.
	pub node_id: u32,
	/// Only the first matching switch plays.
	pub first_only: bool,
	/// Keep playing across switch changes.
	pub continue_playback: bool,
	/// Raw switch mode bits.
	pub mode_bits: u8,
	/// Fade-out time (milliseconds).
	pub fade_out_ms: i32,
	/// Fade-in time (milliseconds).
	pub fade_in_ms: i32,
}

impl SwitchContainer {
	/// Decode a switch container body.
	pub fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let props = AudioProperties::parse(cursor, opt)?;
		let group_type = match cursor.read_u8()? {
			0 => GroupType::Switch,
			1 => GroupType::State,
			other => GroupType::Other(other),
		};
		let group_id = cursor.read_u32_le()?;
		let default_switch = cursor.read_u32_le()?;
		let continuous_validation = cursor.read_bool()?;
		let children = parse_children(cursor, opt)?;

		let count = read_count_u32(cursor, opt)?;
		let mut switches = Vec::with_capacity(count);
		for _ in 0..count {
			let switch_id = cursor.read_u32_le()?;
			let node_ids = parse_children(cursor, opt)?;
			switches.push(SwitchAssignment { switch_id, node_ids });
		}

		let count = read_count_u32(cursor, opt)?;
		let mut params = Vec::with_capacity(count);
		for _ in 0..count {
			let node_id = cursor.read_u32_le()?;
			let bits = cursor.read_u8()?;
			params.push(SwitchNodeParams {
				node_id,
				first_only: bits & (1 << 0) != 0,
				continue_playback: bits & (1 << 1) != 0,
				mode_bits: cursor.read_u8()?,
				fade_out_ms: cursor.read_i32_le()?,
				fade_in_ms: cursor.read_i32_le()?,
			});
		}

		Ok(Self {
			props,
			group_type,
			group_id,
			default_switch,
			continuous_validation,
			children,
			switches,
			params,
		})
	}
}

/// Container playing all children at once, blended per layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerContainer {
	/// Base parameters.
	pub props: AudioProperties,
	/// Child node ids.
	pub children: Vec<u32>,
	/// Layers.
	pub layers: Vec<Layer>,
	/// Re-evaluate the crossfade parameter while playing.
	pub continuous_validation: bool,
}

/// One layer of a layer container.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
	/// Layer id.
	pub layer_id: u32,
	/// RTPC bindings applied to the layer.
	pub rtpcs: Vec<RtpcBinding>,
	/// Parameter driving the crossfade.
	pub crossfade_param_id: u32,
	/// Raw kind of the crossfade parameter.
	pub crossfade_param_kind: u8,
	/// Children with their crossfade curves.
	pub associations: Vec<LayerAssociation>,
}

/// Crossfade curve of one child within a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerAssociation {
	/// Child node id.
	pub child_id: u32,
	/// Crossfade curve.
	pub points: Vec<CurvePoint>,
}

impl LayerContainer {
	/// Decode a layer container body.
	pub fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let props = AudioProperties::parse(cursor, opt)?;
		let children = parse_children(cursor, opt)?;

		let count = read_count_u32(cursor, opt)?;
		let mut layers = Vec::with_capacity(count);
		for _ in 0..count {
			layers.push(Layer::parse(cursor, opt)?);
		}

		let continuous_validation = cursor.read_bool()?;

		Ok(Self {
			props,
			children,
			layers,
			continuous_validation,
		})
	}
}

impl Layer {
	fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let layer_id = cursor.read_u32_le()?;
		let rtpcs = parse_rtpcs(cursor, opt)?;
		let crossfade_param_id = cursor.read_u32_le()?;
		let crossfade_param_kind = cursor.read_u8()?;

		let count = read_count_u32(cursor, opt)?;
		let mut associations = Vec::with_capacity(count);
		for _ in 0..count {
			let child_id = cursor.read_u32_le()?;
			let points = parse_curve_points_u32(cursor, opt)?;
			associations.push(LayerAssociation { child_id, points });
		}

		Ok(Self {
			layer_id,
			rtpcs,
			crossfade_param_id,
			crossfade_param_kind,
			associations,
		})
	}
}
