use crate::bank::Result;
use crate::bank::bytes::Cursor;
use crate::bank::hirc::{
	AuxSends, DecodeOptions, EffectChain, Positioning, PropBundle, RtpcBinding, StateGroupBinding, parse_rtpcs, parse_state_groups, read_count_u32,
};

/// Mixing bus or auxiliary bus.
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
	/// Parent bus id, `0` for master buses.
	pub parent_bus_id: u32,
	/// Property values.
	pub props: PropBundle,
	/// Positioning settings.
	pub positioning: Positioning,
	/// Auxiliary sends.
	pub aux: AuxSends,
	/// Kill the newest voice when the limit is reached.
	pub kill_newest: bool,
	/// Send excess voices to virtual.
	pub use_virtual_behavior: bool,
	/// Ignore the parent's instance limit.
	pub ignore_parent_max_instances: bool,
	/// Bus carries background music.
	pub background_music: bool,
	/// Instance limit, `0` for none.
	pub max_instances: u16,
	/// Raw channel configuration.
	pub channel_config: u32,
	/// Bus applies HDR.
	pub is_hdr_bus: bool,
	/// HDR release uses an exponential curve.
	pub hdr_release_exponential: bool,
	/// Ducking recovery time (milliseconds).
	pub recovery_time_ms: i32,
	/// Maximum ducking attenuation (dB).
	pub max_duck_volume: f32,
	/// Buses ducked while this one plays.
	pub ducks: Vec<DuckInfo>,
	/// Insert effects.
	pub effects: EffectChain,
	/// RTPC bindings.
	pub rtpcs: Vec<RtpcBinding>,
	/// State group bindings.
	pub state_groups: Vec<StateGroupBinding>,
}

/// Ducking applied to another bus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuckInfo {
	/// Ducked bus id.
	pub bus_id: u32,
	/// Duck volume (dB).
	pub volume: f32,
	/// Fade-out time (milliseconds).
	pub fade_out_ms: i32,
	/// Fade-in time (milliseconds).
	pub fade_in_ms: i32,
	/// Raw fade curve shape.
	pub fade_curve: u8,
	/// Raw property being ducked.
	pub target_prop: u8,
}

impl Bus {
	/// Decode a bus or aux bus body.
	pub fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let parent_bus_id = cursor.read_u32_le()?;
		let props = PropBundle::parse(cursor)?;
		let positioning = Positioning::parse(cursor, opt)?;
		let aux = AuxSends::parse(cursor)?;

		let bus_bits = cursor.read_u8()?;
		let max_instances = cursor.read_u16_le()?;
		let channel_config = cursor.read_u32_le()?;
		let hdr_bits = cursor.read_u8()?;
		let recovery_time_ms = cursor.read_i32_le()?;
		let max_duck_volume = cursor.read_f32_le()?;

		let count = read_count_u32(cursor, opt)?;
		let mut ducks = Vec::with_capacity(count);
		for _ in 0..count {
			ducks.push(DuckInfo {
				bus_id: cursor.read_u32_le()?,
				volume: cursor.read_f32_le()?,
				fade_out_ms: cursor.read_i32_le()?,
				fade_in_ms: cursor.read_i32_le()?,
				fade_curve: cursor.read_u8()?,
				target_prop: cursor.read_u8()?,
			});
		}

		let effects = EffectChain::parse(cursor)?;
		let rtpcs = parse_rtpcs(cursor, opt)?;
		let state_groups = parse_state_groups(cursor, opt)?;

		Ok(Self {
			parent_bus_id,
			props,
			positioning,
			aux,
			kill_newest: bus_bits & (1 << 0) != 0,
			use_virtual_behavior: bus_bits & (1 << 1) != 0,
			ignore_parent_max_instances: bus_bits & (1 << 2) != 0,
			background_music: bus_bits & (1 << 3) != 0,
			max_instances,
			channel_config,
			is_hdr_bus: hdr_bits & (1 << 0) != 0,
			hdr_release_exponential: hdr_bits & (1 << 1) != 0,
			recovery_time_ms,
			max_duck_volume,
			ducks,
			effects,
			rtpcs,
			state_groups,
		})
	}
}
