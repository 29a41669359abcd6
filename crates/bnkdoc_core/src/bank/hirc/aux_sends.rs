use crate::bank::Result;
use crate::bank::bytes::Cursor;

/// Number of user-defined auxiliary send slots.
pub const USER_AUX_SEND_COUNT: usize = 4;

/// Auxiliary send settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuxSends {
	/// Game-defined sends override the parent.
	pub override_game_aux: bool,
	/// Game-defined sends are used.
	pub use_game_aux: bool,
	/// User-defined sends override the parent.
	pub override_user_aux: bool,
	/// User-defined aux bus ids, present only when the node has its own sends.
	pub aux_bus_ids: Option<[u32; USER_AUX_SEND_COUNT]>,
}

impl AuxSends {
	/// Read the aux flag byte and, if flagged, the send bus ids.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let bits = cursor.read_u8()?;

		let aux_bus_ids = if bits & (1 << 3) != 0 {
			let mut ids = [0_u32; USER_AUX_SEND_COUNT];
			for id in &mut ids {
				*id = cursor.read_u32_le()?;
			}
			Some(ids)
		} else {
			None
		};

		Ok(Self {
			override_game_aux: bits & (1 << 0) != 0,
			use_game_aux: bits & (1 << 1) != 0,
			override_user_aux: bits & (1 << 2) != 0,
			aux_bus_ids,
		})
	}
}
