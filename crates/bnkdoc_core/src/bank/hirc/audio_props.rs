use crate::bank::Result;
use crate::bank::bytes::Cursor;
use crate::bank::hirc::{
	AuxSends, DecodeOptions, Positioning, PropBundle, RangedModifier, RtpcBinding, StateGroupBinding, parse_ranged_modifiers, parse_rtpcs, parse_state_groups,
};

/// Shared base parameters of every actor-mixer hierarchy node.
///
/// Field order mirrors read order; each optional member is present only when
/// a flag or count read earlier in the block enabled it.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioProperties {
	/// Insert effects.
	pub effects: EffectChain,
	/// Output bus override, `0` when inherited.
	pub output_bus_id: u32,
	/// Parent node id, `0` for top-level nodes.
	pub parent_id: u32,
	/// Priority and MIDI override flags.
	pub behavior: BehaviorFlags,
	/// Property values.
	pub props: PropBundle,
	/// Randomization ranges.
	pub ranged: Vec<RangedModifier>,
	/// Positioning settings.
	pub positioning: Positioning,
	/// Auxiliary sends.
	pub aux: AuxSends,
	/// Voice limiting and virtual voice behavior.
	pub limit: PlaybackLimit,
	/// HDR and loudness behavior.
	pub hdr: HdrFlags,
	/// State group bindings.
	pub state_groups: Vec<StateGroupBinding>,
	/// RTPC bindings.
	pub rtpcs: Vec<RtpcBinding>,
}

impl AudioProperties {
	/// Read the full block in its fixed order.
	pub fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let effects = EffectChain::parse(cursor)?;
		let output_bus_id = cursor.read_u32_le()?;
		let parent_id = cursor.read_u32_le()?;
		let behavior = BehaviorFlags::from_bits(cursor.read_u8()?);
		let props = PropBundle::parse(cursor)?;
		let ranged = parse_ranged_modifiers(cursor)?;
		let positioning = Positioning::parse(cursor, opt)?;
		let aux = AuxSends::parse(cursor)?;
		let limit = PlaybackLimit::parse(cursor)?;
		let hdr = HdrFlags::from_bits(cursor.read_u8()?);
		let state_groups = parse_state_groups(cursor, opt)?;
		let rtpcs = parse_rtpcs(cursor, opt)?;

		Ok(Self {
			effects,
			output_bus_id,
			parent_id,
			behavior,
			props,
			ranged,
			positioning,
			aux,
			limit,
			hdr,
			state_groups,
			rtpcs,
		})
	}
}

/// Insert effect slots of a node or bus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectChain {
	/// Effects override the parent's chain.
	pub override_parent: bool,
	/// Bypass bits, present only when at least one effect is set.
	pub bypass_bits: Option<u8>,
	/// Effect slots.
	pub effects: Vec<EffectSlot>,
}

/// One insert effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectSlot {
	/// Slot index.
	pub slot: u8,
	/// Effect object id.
	pub fx_id: u32,
	/// Effect is a share set rather than a custom instance.
	pub is_share_set: bool,
	/// Effect was rendered offline.
	pub is_rendered: bool,
}

impl EffectChain {
	/// Read `override u8, count u8` and, when `count > 0`, the bypass bits and slots.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let override_parent = cursor.read_bool()?;
		let count = cursor.read_u8()?;
		if count == 0 {
			return Ok(Self {
				override_parent,
				bypass_bits: None,
				effects: Vec::new(),
			});
		}

		let bypass_bits = cursor.read_u8()?;
		let mut effects = Vec::with_capacity(usize::from(count));
		for _ in 0..count {
			effects.push(EffectSlot {
				slot: cursor.read_u8()?,
				fx_id: cursor.read_u32_le()?,
				is_share_set: cursor.read_bool()?,
				is_rendered: cursor.read_bool()?,
			});
		}

		Ok(Self {
			override_parent,
			bypass_bits: Some(bypass_bits),
			effects,
		})
	}

	/// Whether the effect in `slot` is bypassed; bit 4 bypasses every slot.
	pub fn is_bypassed(&self, slot: u8) -> bool {
		let Some(bits) = self.bypass_bits else {
			return false;
		};
		bits & (1 << 4) != 0 || (slot < 4 && bits & (1 << slot) != 0)
	}
}

/// Priority and MIDI override flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BehaviorFlags {
	/// Priority overrides the parent.
	pub priority_override_parent: bool,
	/// Distance offset applies to priority.
	pub priority_apply_distance_factor: bool,
	/// MIDI event behavior overrides the parent.
	pub override_midi_events: bool,
	/// MIDI note tracking overrides the parent.
	pub override_midi_note_tracking: bool,
	/// MIDI note tracking is enabled.
	pub enable_midi_note_tracking: bool,
	/// Loops break on MIDI note off.
	pub midi_break_loop_on_note_off: bool,
}

impl BehaviorFlags {
	/// Unpack the flag byte.
	pub fn from_bits(bits: u8) -> Self {
		Self {
			priority_override_parent: bits & (1 << 0) != 0,
			priority_apply_distance_factor: bits & (1 << 1) != 0,
			override_midi_events: bits & (1 << 2) != 0,
			override_midi_note_tracking: bits & (1 << 3) != 0,
			enable_midi_note_tracking: bits & (1 << 4) != 0,
			midi_break_loop_on_note_off: bits & (1 << 5) != 0,
		}
	}
}

/// Voice limit and virtual voice behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackLimit {
	/// Kill the newest voice when the limit is reached (else the oldest).
	pub kill_newest: bool,
	/// Send excess voices to virtual instead of killing them.
	pub use_virtual_behavior: bool,
	/// Ignore the parent's instance limit.
	pub ignore_parent_max_instances: bool,
	/// Virtual voice settings override the parent.
	pub virtual_voice_override_parent: bool,
	/// How a virtual voice resumes.
	pub virtual_queue_behavior: VirtualQueueBehavior,
	/// Instance limit, `0` for none.
	pub max_instances: u16,
	/// What happens below the volume threshold.
	pub below_threshold_behavior: BelowThresholdBehavior,
}

/// Resume point of a voice leaving virtual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualQueueBehavior {
	/// Restart from the beginning.
	FromBeginning,
	/// Resume at the elapsed time.
	FromElapsedTime,
	/// Resume where it stopped.
	Resume,
	/// Unrecognized raw value.
	Other(u8),
}

/// Behavior of a voice falling below the volume threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BelowThresholdBehavior {
	/// Keep playing.
	ContinueToPlay,
	/// Kill the voice.
	KillVoice,
	/// Make the voice virtual.
	SendToVirtualVoice,
	/// Kill one-shots, virtualize loops.
	KillIfOneShotElseVirtual,
	/// Unrecognized raw value.
	Other(u8),
}

impl PlaybackLimit {
	/// Read `bits u8, virtual_queue u8, max_instances u16, below_threshold u8`.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let bits = cursor.read_u8()?;
		let virtual_queue_behavior = match cursor.read_u8()? {
			0 => VirtualQueueBehavior::FromBeginning,
			1 => VirtualQueueBehavior::FromElapsedTime,
			2 => VirtualQueueBehavior::Resume,
			other => VirtualQueueBehavior::Other(other),
		};
		let max_instances = cursor.read_u16_le()?;
		let below_threshold_behavior = match cursor.read_u8()? {
			0 => BelowThresholdBehavior::ContinueToPlay,
			1 => BelowThresholdBehavior::KillVoice,
			2 => BelowThresholdBehavior::SendToVirtualVoice,
			3 => BelowThresholdBehavior::KillIfOneShotElseVirtual,
			other => BelowThresholdBehavior::Other(other),
		};

		Ok(Self {
			kill_newest: bits & (1 << 0) != 0,
			use_virtual_behavior: bits & (1 << 1) != 0,
			ignore_parent_max_instances: bits & (1 << 2) != 0,
			virtual_voice_override_parent: bits & (1 << 3) != 0,
			virtual_queue_behavior,
			max_instances,
			below_threshold_behavior,
		})
	}
}

/// HDR and loudness normalization flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HdrFlags {
	/// HDR envelope overrides the parent.
	pub override_envelope: bool,
	/// Loudness analysis overrides the parent.
	pub override_analysis: bool,
	/// Normalize loudness.
	pub normalize_loudness: bool,
	/// HDR envelope is enabled.
	pub enable_envelope: bool,
}

impl HdrFlags {
	/// Unpack the flag byte.
	pub fn from_bits(bits: u8) -> Self {
		Self {
			override_envelope: bits & (1 << 0) != 0,
			override_analysis: bits & (1 << 1) != 0,
			normalize_loudness: bits & (1 << 2) != 0,
			enable_envelope: bits & (1 << 3) != 0,
		}
	}
}
