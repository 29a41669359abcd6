use crate::bank::Result;
use crate::bank::bytes::Cursor;
use crate::bank::hirc::{DecodeOptions, PropBundle, RangedModifier, parse_ranged_modifiers, read_count_u32};

/// Operation performed by an event on a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
	/// Raw action type; the high byte selects the operation.
	pub action_type: u16,
	/// Target object id.
	pub target_id: u32,
	/// Target is a bus.
	pub is_bus: bool,
	/// Property values such as delay and fade time.
	pub props: PropBundle,
	/// Randomization ranges.
	pub ranged: Vec<RangedModifier>,
	/// Operation-specific parameters.
	pub params: ActionParams,
}

/// Operation-specific action parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionParams {
	/// Stop playing.
	Stop(ActiveParams),
	/// Pause playback.
	Pause(ActiveParams),
	/// Resume paused playback.
	Resume(ActiveParams),
	/// Start playback.
	Play {
		/// Fade-in curve shape.
		fade_curve: u8,
		/// Bank holding the target.
		bank_id: u32,
	},
	/// Change a state group's current state.
	SetState {
		/// State group id.
		group_id: u32,
		/// New state id.
		state_id: u32,
	},
	/// Change a switch group's current switch.
	SetSwitch {
		/// Switch group id.
		group_id: u32,
		/// New switch id.
		switch_id: u32,
	},
	/// Parameters of an operation without a structural decoder, kept verbatim.
	Raw(Vec<u8>),
}

/// Parameters shared by stop, pause, and resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveParams {
	/// Fade curve shape.
	pub fade_curve: u8,
	/// Operation-specific flag bits.
	pub flags: u8,
	/// Objects excluded from the operation.
	pub exceptions: Vec<ActionException>,
}

/// One object excluded from an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionException {
	/// Object id.
	pub id: u32,
	/// Object is a bus.
	pub is_bus: bool,
}

impl Action {
	/// Stop operation code.
	pub const STOP: u8 = 0x01;
	/// Pause operation code.
	pub const PAUSE: u8 = 0x02;
	/// Resume operation code.
	pub const RESUME: u8 = 0x03;
	/// Play operation code.
	pub const PLAY: u8 = 0x04;
	/// Set state operation code.
	pub const SET_STATE: u8 = 0x12;
	/// Set switch operation code.
	pub const SET_SWITCH: u8 = 0x19;

	/// Decode an action body; unrecognized operations keep the rest of the record raw.
	pub fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let action_type = cursor.read_u16_le()?;
		let target_id = cursor.read_u32_le()?;
		let is_bus = cursor.read_bool()?;
		let props = PropBundle::parse(cursor)?;
		let ranged = parse_ranged_modifiers(cursor)?;

		let params = match (action_type >> 8) as u8 {
			Self::STOP => ActionParams::Stop(ActiveParams::parse(cursor, opt)?),
			Self::PAUSE => ActionParams::Pause(ActiveParams::parse(cursor, opt)?),
			Self::RESUME => ActionParams::Resume(ActiveParams::parse(cursor, opt)?),
			Self::PLAY => ActionParams::Play {
				fade_curve: cursor.read_u8()?,
				bank_id: cursor.read_u32_le()?,
			},
			Self::SET_STATE => ActionParams::SetState {
				group_id: cursor.read_u32_le()?,
				state_id: cursor.read_u32_le()?,
			},
			Self::SET_SWITCH => ActionParams::SetSwitch {
				group_id: cursor.read_u32_le()?,
				switch_id: cursor.read_u32_le()?,
			},
			_ => ActionParams::Raw(cursor.read_rest().to_vec()),
		};

		Ok(Self {
			action_type,
			target_id,
			is_bus,
			props,
			ranged,
			params,
		})
	}

	/// Operation code (high byte of `action_type`).
	pub fn operation(&self) -> u8 {
		(self.action_type >> 8) as u8
	}
}

impl ActiveParams {
	fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let fade_curve = cursor.read_u8()?;
		let flags = cursor.read_u8()?;
		let count = read_count_u32(cursor, opt)?;
		let mut exceptions = Vec::with_capacity(count);
		for _ in 0..count {
			exceptions.push(ActionException {
				id: cursor.read_u32_le()?,
				is_bus: cursor.read_bool()?,
			});
		}

		Ok(Self {
			fade_curve,
			flags,
			exceptions,
		})
	}
}

/// Named trigger listing the actions it runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
	/// Action ids in execution order.
	pub action_ids: Vec<u32>,
}

impl Event {
	/// Decode an event body.
	pub fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let count = read_count_u32(cursor, opt)?;
		let mut action_ids = Vec::with_capacity(count);
		for _ in 0..count {
			action_ids.push(cursor.read_u32_le()?);
		}
		Ok(Self { action_ids })
	}
}
