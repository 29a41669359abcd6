use crate::bank::Result;
use crate::bank::bytes::Cursor;
use crate::bank::hirc::{DecodeOptions, read_count_u32};

const OVERRIDE_PARENT: u8 = 1 << 0;
const HAS_2D: u8 = 1 << 1;
const HAS_3D: u8 = 1 << 2;
const USER_DEFINED_3D: u8 = 1 << 3;

/// Positioning behavior of a node.
///
/// One flag byte gates three independent things: the 2D panner block, the
/// 3D block, and, within 3D, whether the automation path block follows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positioning {
	/// Positioning overrides the parent's settings.
	pub override_parent: bool,
	/// Panner toggle, present only when 2D positioning is available.
	pub panner_enabled: Option<bool>,
	/// 3D block, present only when 3D positioning is available.
	pub three_d: Option<Positioning3d>,
}

/// 3D positioning block.
#[derive(Debug, Clone, PartialEq)]
pub struct Positioning3d {
	/// Spatialize the voice.
	pub spatialize: bool,
	/// Apply the attenuation object.
	pub attenuation_enabled: bool,
	/// Keep emitter position and orientation fixed after start.
	pub hold_emitter: bool,
	/// Keep listener orientation fixed after start.
	pub hold_listener_orientation: bool,
	/// Emitter follows listener orientation along the path.
	pub follow_orientation: bool,
	/// Path playlist loops.
	pub looping: bool,
	/// Game-defined position updates continuously.
	pub dynamic: bool,
	/// Attenuation object id.
	pub attenuation_id: u32,
	/// Where the 3D position comes from.
	pub source: PositionSource,
}

/// Origin of 3D position data.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionSource {
	/// The game supplies emitter positions at runtime.
	GameDefined,
	/// Positions follow authored automation paths.
	UserDefined(AutomationPath),
}

/// Authored 3D automation: keyed vertices grouped into a playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct AutomationPath {
	/// How playlist items are chosen.
	pub mode: PathMode,
	/// Transition time between paths (milliseconds).
	pub transition_ms: i32,
	/// Path keys.
	pub vertices: Vec<PathVertex>,
	/// Playlist items referencing vertex ranges.
	pub playlist: Vec<PathPlaylistItem>,
	/// Random ranges applied per playlist item.
	pub ranges: Vec<PathRange>,
}

/// Playlist traversal mode of an automation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMode {
	/// Step through items in order, one per play.
	StepSequence,
	/// Play items in order continuously.
	ContinuousSequence,
	/// Pick a random item per play.
	StepRandom,
	/// Pick random items continuously.
	ContinuousRandom,
	/// Unrecognized raw mode.
	Other(u8),
}

impl PathMode {
	/// Map a raw mode byte.
	pub fn from_u8(value: u8) -> Self {
		match value {
			0 => Self::StepSequence,
			1 => Self::ContinuousSequence,
			2 => Self::StepRandom,
			3 => Self::ContinuousRandom,
			other => Self::Other(other),
		}
	}
}

/// One path key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathVertex {
	/// X coordinate.
	pub x: f32,
	/// Y coordinate.
	pub y: f32,
	/// Z coordinate.
	pub z: f32,
	/// Time to reach the next key (milliseconds).
	pub duration_ms: i32,
}

/// One playlist item: a run of vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathPlaylistItem {
	/// Index of the first vertex.
	pub vertex_offset: u32,
	/// Number of vertices.
	pub vertex_count: u32,
}

/// Random offset ranges for one playlist item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathRange {
	/// X range.
	pub x: f32,
	/// Y range.
	pub y: f32,
	/// Z range.
	pub z: f32,
}

impl Positioning {
	/// Read the positioning flag byte and every block it enables.
	pub fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let bits = cursor.read_u8()?;

		let panner_enabled = if bits & HAS_2D != 0 { Some(cursor.read_bool()?) } else { None };
		let three_d = if bits & HAS_3D != 0 {
			Some(Positioning3d::parse(cursor, bits & USER_DEFINED_3D != 0, opt)?)
		} else {
			None
		};

		Ok(Self {
			override_parent: bits & OVERRIDE_PARENT != 0,
			panner_enabled,
			three_d,
		})
	}
}

impl Positioning3d {
	fn parse(cursor: &mut Cursor<'_>, user_defined: bool, opt: &DecodeOptions) -> Result<Self> {
		let bits = cursor.read_u8()?;
		let attenuation_id = cursor.read_u32_le()?;
		let source = if user_defined {
			PositionSource::UserDefined(AutomationPath::parse(cursor, opt)?)
		} else {
			PositionSource::GameDefined
		};

		Ok(Self {
			spatialize: bits & (1 << 0) != 0,
			attenuation_enabled: bits & (1 << 1) != 0,
			hold_emitter: bits & (1 << 2) != 0,
			hold_listener_orientation: bits & (1 << 3) != 0,
			follow_orientation: bits & (1 << 4) != 0,
			looping: bits & (1 << 5) != 0,
			dynamic: bits & (1 << 6) != 0,
			attenuation_id,
			source,
		})
	}
}

impl AutomationPath {
	fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let mode = PathMode::from_u8(cursor.read_u8()?);
		let transition_ms = cursor.read_i32_le()?;

		let count = read_count_u32(cursor, opt)?;
		let mut vertices = Vec::with_capacity(count);
		for _ in 0..count {
			vertices.push(PathVertex {
				x: cursor.read_f32_le()?,
				y: cursor.read_f32_le()?,
				z: cursor.read_f32_le()?,
				duration_ms: cursor.read_i32_le()?,
			});
		}

		let count = read_count_u32(cursor, opt)?;
		let mut playlist = Vec::with_capacity(count);
		for _ in 0..count {
			playlist.push(PathPlaylistItem {
				vertex_offset: cursor.read_u32_le()?,
				vertex_count: cursor.read_u32_le()?,
			});
		}

		let count = read_count_u32(cursor, opt)?;
		let mut ranges = Vec::with_capacity(count);
		for _ in 0..count {
			ranges.push(PathRange {
				x: cursor.read_f32_le()?,
				y: cursor.read_f32_le()?,
				z: cursor.read_f32_le()?,
			});
		}

		Ok(Self {
			mode,
			transition_ms,
			vertices,
			playlist,
			ranges,
		})
	}
}
