use crate::bank::Result;
use crate::bank::bytes::Cursor;
use crate::bank::hirc::{DecodeOptions, read_count_u16, read_count_u32};

/// Real-time parameter binding: a source parameter drives a target through a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RtpcBinding {
	/// Driving parameter.
	pub source: RtpcSource,
	/// Driven property.
	pub target: RtpcTarget,
	/// Curve id.
	pub curve_id: u32,
	/// Y-axis scaling of the curve.
	pub scaling: CurveScaling,
	/// Curve points in x order.
	pub points: Vec<CurvePoint>,
}

/// Source of an RTPC binding, disambiguated by the byte preceding the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtpcSource {
	/// Game parameter id.
	GameParameter(u32),
	/// MIDI parameter id.
	MidiParameter(u32),
	/// LFO modulator id.
	Lfo(u32),
	/// Unrecognized source kind.
	Other {
		/// Raw kind byte.
		kind: u8,
		/// Source id.
		id: u32,
	},
}

impl RtpcSource {
	/// Source id regardless of kind.
	pub fn id(self) -> u32 {
		match self {
			Self::GameParameter(id) | Self::MidiParameter(id) | Self::Lfo(id) => id,
			Self::Other { id, .. } => id,
		}
	}
}

/// Property driven by an RTPC binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtpcTarget {
	/// Voice volume.
	Volume,
	/// Low-frequency effects send.
	Lfe,
	/// Pitch.
	Pitch,
	/// Low-pass filter.
	LowPassFilter,
	/// High-pass filter.
	HighPassFilter,
	/// Bus volume.
	BusVolume,
	/// Initial delay.
	InitialDelay,
	/// Make-up gain.
	MakeUpGain,
	/// Playback priority.
	Priority,
	/// Maximum voice count.
	MaxInstances,
	/// Left/right panning.
	PanLeftRight,
	/// Front/rear panning.
	PanFrontRear,
	/// Game auxiliary send volume.
	GameAuxSendVolume,
	/// Output bus volume.
	OutputBusVolume,
	/// Playback speed.
	PlaybackSpeed,
	/// Unrecognized raw target.
	Other(u8),
}

impl RtpcTarget {
	/// Map a raw target byte.
	pub fn from_u8(value: u8) -> Self {
		match value {
			0 => Self::Volume,
			1 => Self::Lfe,
			2 => Self::Pitch,
			3 => Self::LowPassFilter,
			4 => Self::HighPassFilter,
			5 => Self::BusVolume,
			6 => Self::InitialDelay,
			7 => Self::MakeUpGain,
			8 => Self::Priority,
			9 => Self::MaxInstances,
			10 => Self::PanLeftRight,
			11 => Self::PanFrontRear,
			12 => Self::GameAuxSendVolume,
			13 => Self::OutputBusVolume,
			14 => Self::PlaybackSpeed,
			other => Self::Other(other),
		}
	}
}

/// Y-axis scaling applied to curve values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveScaling {
	/// Values are used as-is.
	None,
	/// Decibel scaling.
	Db,
	/// Logarithmic scaling.
	Log,
	/// Decibel values converted to linear gain.
	DbToLinear,
	/// Unrecognized raw scaling.
	Other(u8),
}

impl CurveScaling {
	/// Map a raw scaling byte.
	pub fn from_u8(value: u8) -> Self {
		match value {
			0 => Self::None,
			2 => Self::Db,
			3 => Self::Log,
			4 => Self::DbToLinear,
			other => Self::Other(other),
		}
	}
}

/// Interpolation from one curve point to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveShape {
	/// Logarithmic, base 3.
	Log3,
	/// Sine.
	Sine,
	/// Logarithmic, base 1.41.
	Log1,
	/// Inverted S-curve.
	InvertedSCurve,
	/// Linear.
	Linear,
	/// S-curve.
	SCurve,
	/// Exponential, base 1.41.
	Exp1,
	/// Reciprocal sine.
	SineRecip,
	/// Exponential, base 3.
	Exp3,
	/// Hold the value until the next point.
	Constant,
	/// Unrecognized raw shape.
	Other(u8),
}

impl CurveShape {
	/// Map a raw shape byte.
	pub fn from_u8(value: u8) -> Self {
		match value {
			0 => Self::Log3,
			1 => Self::Sine,
			2 => Self::Log1,
			3 => Self::InvertedSCurve,
			4 => Self::Linear,
			5 => Self::SCurve,
			6 => Self::Exp1,
			7 => Self::SineRecip,
			8 => Self::Exp3,
			9 => Self::Constant,
			other => Self::Other(other),
		}
	}
}

/// One curve point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
	/// Input value.
	pub x: f32,
	/// Output value.
	pub y: f32,
	/// Shape of the segment towards the next point.
	pub shape: CurveShape,
	/// Reserved bytes, kept verbatim.
	pub reserved: [u8; 3],
}

impl CurvePoint {
	/// Read `x f32, y f32, shape u8, reserved [u8; 3]`.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let x = cursor.read_f32_le()?;
		let y = cursor.read_f32_le()?;
		let shape = CurveShape::from_u8(cursor.read_u8()?);
		let mut reserved = [0_u8; 3];
		reserved.copy_from_slice(cursor.read_exact(3)?);
		Ok(Self { x, y, shape, reserved })
	}
}

/// Read `count u16` curve points.
pub fn parse_curve_points_u16(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Vec<CurvePoint>> {
	let count = read_count_u16(cursor, opt)?;
	parse_points(cursor, count)
}

/// Read `count u32` curve points.
pub fn parse_curve_points_u32(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Vec<CurvePoint>> {
	let count = read_count_u32(cursor, opt)?;
	parse_points(cursor, count)
}

fn parse_points(cursor: &mut Cursor<'_>, count: usize) -> Result<Vec<CurvePoint>> {
	let mut points = Vec::with_capacity(count);
	for _ in 0..count {
		points.push(CurvePoint::parse(cursor)?);
	}
	Ok(points)
}

impl RtpcBinding {
	fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let kind = cursor.read_u8()?;
		let id = cursor.read_u32_le()?;
		let source = match kind {
			0 => RtpcSource::GameParameter(id),
			1 => RtpcSource::MidiParameter(id),
			2 => RtpcSource::Lfo(id),
			kind => RtpcSource::Other { kind, id },
		};

		let target = RtpcTarget::from_u8(cursor.read_u8()?);
		let curve_id = cursor.read_u32_le()?;
		let scaling = CurveScaling::from_u8(cursor.read_u8()?);
		let points = parse_curve_points_u16(cursor, opt)?;

		Ok(Self {
			source,
			target,
			curve_id,
			scaling,
			points,
		})
	}
}

/// Read a `count u16` RTPC list.
pub fn parse_rtpcs(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Vec<RtpcBinding>> {
	let count = read_count_u16(cursor, opt)?;
	let mut out = Vec::with_capacity(count);
	for _ in 0..count {
		out.push(RtpcBinding::parse(cursor, opt)?);
	}
	Ok(out)
}
