use crate::bank::Result;
use crate::bank::bytes::Cursor;
use crate::bank::hirc::{DecodeOptions, read_count_u16, read_count_u32};

/// State group a node reacts to, with per-state property objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateGroupBinding {
	/// State group id.
	pub group_id: u32,
	/// When state changes take effect.
	pub sync: SyncType,
	/// Custom property objects per state.
	pub states: Vec<CustomState>,
}

/// Alignment point for applying a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncType {
	/// Apply immediately.
	Immediate,
	/// Next music grid line.
	NextGrid,
	/// Next bar.
	NextBar,
	/// Next beat.
	NextBeat,
	/// Next cue.
	NextCue,
	/// Next custom cue.
	CustomCue,
	/// Entry cue.
	EntryCue,
	/// Exit cue.
	ExitCue,
	/// Unrecognized raw sync type.
	Other(u8),
}

impl SyncType {
	/// Map a raw sync byte.
	pub fn from_u8(value: u8) -> Self {
		match value {
			0 => Self::Immediate,
			1 => Self::NextGrid,
			2 => Self::NextBar,
			3 => Self::NextBeat,
			4 => Self::NextCue,
			5 => Self::CustomCue,
			6 => Self::EntryCue,
			7 => Self::ExitCue,
			other => Self::Other(other),
		}
	}
}

/// State id mapped to the state object carrying its property overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomState {
	/// State id within the group.
	pub state_id: u32,
	/// State object id in the hierarchy chunk.
	pub state_object_id: u32,
}

/// Read a `count u32` list of state group bindings.
pub fn parse_state_groups(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Vec<StateGroupBinding>> {
	let count = read_count_u32(cursor, opt)?;
	let mut out = Vec::with_capacity(count);
	for _ in 0..count {
		let group_id = cursor.read_u32_le()?;
		let sync = SyncType::from_u8(cursor.read_u8()?);

		let state_count = read_count_u16(cursor, opt)?;
		let mut states = Vec::with_capacity(state_count);
		for _ in 0..state_count {
			states.push(CustomState {
				state_id: cursor.read_u32_le()?,
				state_object_id: cursor.read_u32_le()?,
			});
		}

		out.push(StateGroupBinding { group_id, sync, states });
	}
	Ok(out)
}
