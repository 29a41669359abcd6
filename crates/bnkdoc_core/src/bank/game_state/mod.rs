use crate::bank::Result;
use crate::bank::bytes::Cursor;

/// Decoded `STMG` chunk: global volume settings, state groups, switch groups, and game parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
	/// Volume below which voices may go virtual.
	pub volume_threshold: f32,
	/// Global voice limit.
	pub max_voice_instances: u16,
	/// State groups with their transition tables.
	pub state_groups: Vec<StateGroup>,
	/// Switch groups driven by game parameters.
	pub switch_groups: Vec<SwitchGroup>,
	/// Game parameter defaults.
	pub game_parameters: Vec<GameParameter>,
}

/// One state group and its transition times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateGroup {
	/// State group id.
	pub id: u32,
	/// Transition time used when no explicit entry matches.
	pub default_transition_ms: i32,
	/// Explicit state-to-state transition times.
	pub transitions: Vec<StateTransition>,
}

/// Transition time between two states of one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
	/// Source state id.
	pub from_state: u32,
	/// Destination state id.
	pub to_state: u32,
	/// Transition time in milliseconds.
	pub transition_ms: i32,
}

/// One switch group mapped onto a game parameter curve.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchGroup {
	/// Switch group id.
	pub id: u32,
	/// Game parameter driving the switch.
	pub game_parameter_id: u32,
	/// Parameter value to switch mapping.
	pub points: Vec<SwitchPoint>,
}

/// One point on a switch group curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchPoint {
	/// Game parameter value.
	pub x: f32,
	/// Switch selected at this value.
	pub switch_id: u32,
	/// Raw curve shape towards the next point.
	pub shape: u32,
}

/// Default value of one game parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameParameter {
	/// Game parameter id.
	pub id: u32,
	/// Value used before the game sets one.
	pub default_value: f32,
}

impl GameState {
	/// Parse game state settings from an `STMG` payload.
	pub fn parse(payload: &[u8]) -> Result<Self> {
		Self::parse_fields(&mut Cursor::new(payload)).map_err(|err| err.into_malformed("game state"))
	}

	fn parse_fields(cursor: &mut Cursor<'_>) -> Result<Self> {
		let volume_threshold = cursor.read_f32_le()?;
		let max_voice_instances = cursor.read_u16_le()?;

		let count = cursor.read_u32_le()?;
		let mut state_groups = Vec::new();
		for _ in 0..count {
			let id = cursor.read_u32_le()?;
			let default_transition_ms = cursor.read_i32_le()?;
			let transition_count = cursor.read_u32_le()?;
			let mut transitions = Vec::new();
			for _ in 0..transition_count {
				transitions.push(StateTransition {
					from_state: cursor.read_u32_le()?,
					to_state: cursor.read_u32_le()?,
					transition_ms: cursor.read_i32_le()?,
				});
			}
			state_groups.push(StateGroup {
				id,
				default_transition_ms,
				transitions,
			});
		}

		let count = cursor.read_u32_le()?;
		let mut switch_groups = Vec::new();
		for _ in 0..count {
			let id = cursor.read_u32_le()?;
			let game_parameter_id = cursor.read_u32_le()?;
			let point_count = cursor.read_u32_le()?;
			let mut points = Vec::new();
			for _ in 0..point_count {
				points.push(SwitchPoint {
					x: cursor.read_f32_le()?,
					switch_id: cursor.read_u32_le()?,
					shape: cursor.read_u32_le()?,
				});
			}
			switch_groups.push(SwitchGroup { id, game_parameter_id, points });
		}

		let count = cursor.read_u32_le()?;
		let mut game_parameters = Vec::new();
		for _ in 0..count {
			game_parameters.push(GameParameter {
				id: cursor.read_u32_le()?,
				default_value: cursor.read_f32_le()?,
			});
		}

		Ok(Self {
			volume_threshold,
			max_voice_instances,
			state_groups,
			switch_groups,
			game_parameters,
		})
	}

	/// Look up a state group by id.
	pub fn state_group(&self, id: u32) -> Option<&StateGroup> {
		self.state_groups.iter().find(|group| group.id == id)
	}
}

impl StateGroup {
	/// Transition time from one state to another, falling back to the group default.
	pub fn transition_ms(&self, from_state: u32, to_state: u32) -> i32 {
		self.transitions
			.iter()
			.find(|item| item.from_state == from_state && item.to_state == to_state)
			.map_or(self.default_transition_ms, |item| item.transition_ms)
	}
}
