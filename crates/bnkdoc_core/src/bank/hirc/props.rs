use crate::bank::Result;
use crate::bank::bytes::Cursor;

/// Identifier of one slot in a property bundle.
///
/// The id decides how the slot's four value bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(pub u8);

/// How the four value bytes of a property are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyValueKind {
	/// IEEE-754 single precision.
	Float,
	/// Signed 32-bit integer.
	Int,
	/// Unsigned 32-bit integer, usually an object id.
	Uint,
}

impl PropertyId {
	/// Output volume (dB).
	pub const VOLUME: Self = Self(0);
	/// Low-frequency effects send (dB).
	pub const LFE: Self = Self(1);
	/// Pitch (cents).
	pub const PITCH: Self = Self(2);
	/// Low-pass filter amount.
	pub const LOW_PASS_FILTER: Self = Self(3);
	/// High-pass filter amount.
	pub const HIGH_PASS_FILTER: Self = Self(4);
	/// Bus volume (dB).
	pub const BUS_VOLUME: Self = Self(5);
	/// Make-up gain (dB).
	pub const MAKE_UP_GAIN: Self = Self(6);
	/// Playback priority.
	pub const PRIORITY: Self = Self(7);
	/// Priority offset applied at max distance.
	pub const PRIORITY_DISTANCE_OFFSET: Self = Self(8);
	/// Loop count, `0` meaning infinite.
	pub const LOOP_COUNT: Self = Self(9);
	/// Initial delay (seconds).
	pub const INITIAL_DELAY: Self = Self(10);
	/// Left/right panning.
	pub const PAN_LEFT_RIGHT: Self = Self(11);
	/// Front/rear panning.
	pub const PAN_FRONT_REAR: Self = Self(12);
	/// Center channel percentage.
	pub const CENTER_PERCENT: Self = Self(13);
	/// First user auxiliary send volume; the next three ids follow.
	pub const USER_AUX_SEND_VOLUME_0: Self = Self(14);
	/// Game-defined auxiliary send volume.
	pub const GAME_AUX_SEND_VOLUME: Self = Self(18);
	/// Output bus volume.
	pub const OUTPUT_BUS_VOLUME: Self = Self(19);
	/// Output bus high-pass filter.
	pub const OUTPUT_BUS_HPF: Self = Self(20);
	/// Output bus low-pass filter.
	pub const OUTPUT_BUS_LPF: Self = Self(21);
	/// Random container pick weight.
	pub const PROBABILITY: Self = Self(22);
	/// Action delay (milliseconds).
	pub const DELAY_TIME: Self = Self(23);
	/// Action fade time (milliseconds).
	pub const TRANSITION_TIME: Self = Self(24);
	/// Attached plugin effect id.
	pub const ATTACHED_PLUGIN_FX_ID: Self = Self(25);
	/// Attenuation object id.
	pub const ATTENUATION_ID: Self = Self(26);
	/// Dialogue event mode.
	pub const DIALOGUE_MODE: Self = Self(27);
	/// Playback speed multiplier.
	pub const PLAYBACK_SPEED: Self = Self(28);

	/// Value interpretation for this id. Unrecognized ids read as float.
	pub fn value_kind(self) -> PropertyValueKind {
		match self {
			Self::LOOP_COUNT | Self::DELAY_TIME | Self::TRANSITION_TIME => PropertyValueKind::Int,
			Self::ATTACHED_PLUGIN_FX_ID | Self::ATTENUATION_ID | Self::DIALOGUE_MODE => PropertyValueKind::Uint,
			_ => PropertyValueKind::Float,
		}
	}

	/// Stable lowercase label, `None` for unrecognized ids.
	pub fn name(self) -> Option<&'static str> {
		Some(match self.0 {
			0 => "volume",
			1 => "lfe",
			2 => "pitch",
			3 => "low_pass_filter",
			4 => "high_pass_filter",
			5 => "bus_volume",
			6 => "make_up_gain",
			7 => "priority",
			8 => "priority_distance_offset",
			9 => "loop_count",
			10 => "initial_delay",
			11 => "pan_left_right",
			12 => "pan_front_rear",
			13 => "center_percent",
			14 => "user_aux_send_volume_0",
			15 => "user_aux_send_volume_1",
			16 => "user_aux_send_volume_2",
			17 => "user_aux_send_volume_3",
			18 => "game_aux_send_volume",
			19 => "output_bus_volume",
			20 => "output_bus_hpf",
			21 => "output_bus_lpf",
			22 => "probability",
			23 => "delay_time",
			24 => "transition_time",
			25 => "attached_plugin_fx_id",
			26 => "attenuation_id",
			27 => "dialogue_mode",
			28 => "playback_speed",
			_ => return None,
		})
	}
}

/// One decoded property value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropValue {
	/// Float value.
	Float(f32),
	/// Signed integer value.
	Int(i32),
	/// Unsigned integer value.
	Uint(u32),
}

impl PropValue {
	/// Value widened to `f64` regardless of storage kind.
	pub fn as_f64(self) -> f64 {
		match self {
			Self::Float(value) => f64::from(value),
			Self::Int(value) => f64::from(value),
			Self::Uint(value) => f64::from(value),
		}
	}
}

/// Property id/value pairs in bundle order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropBundle {
	/// Decoded pairs.
	pub entries: Vec<(PropertyId, PropValue)>,
}

impl PropBundle {
	/// Read `count u8`, the id table, then one typed value per id.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let count = usize::from(cursor.read_u8()?);
		let ids = cursor.read_exact(count)?;

		let mut entries = Vec::with_capacity(count);
		for id in ids.iter().copied().map(PropertyId) {
			let value = match id.value_kind() {
				PropertyValueKind::Float => PropValue::Float(cursor.read_f32_le()?),
				PropertyValueKind::Int => PropValue::Int(cursor.read_i32_le()?),
				PropertyValueKind::Uint => PropValue::Uint(cursor.read_u32_le()?),
			};
			entries.push((id, value));
		}

		Ok(Self { entries })
	}

	/// First value stored for `id`.
	pub fn get(&self, id: PropertyId) -> Option<PropValue> {
		self.entries.iter().find(|(key, _)| *key == id).map(|(_, value)| *value)
	}

	/// Whether the bundle is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Randomization range for one property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangedModifier {
	/// Property being randomized.
	pub id: PropertyId,
	/// Lower offset.
	pub min: f32,
	/// Upper offset.
	pub max: f32,
}

/// Read `count u8`, the id table, then a `(min, max)` pair per id.
pub fn parse_ranged_modifiers(cursor: &mut Cursor<'_>) -> Result<Vec<RangedModifier>> {
	let count = usize::from(cursor.read_u8()?);
	let ids = cursor.read_exact(count)?;

	let mut out = Vec::with_capacity(count);
	for id in ids.iter().copied().map(PropertyId) {
		let min = cursor.read_f32_le()?;
		let max = cursor.read_f32_le()?;
		out.push(RangedModifier { id, min, max });
	}
	Ok(out)
}
