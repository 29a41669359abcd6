use crate::bank::Result;
use crate::bank::bytes::Cursor;
use crate::bank::hirc::{CurvePoint, CurveScaling, DecodeOptions, RtpcBinding, parse_curve_points_u16, parse_rtpcs};

/// Number of curve slots in an attenuation.
pub const ATTENUATION_CURVE_SLOTS: usize = 7;

/// Distance attenuation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Attenuation {
	/// Cone settings, present only when the cone is enabled.
	pub cone: Option<Cone>,
	/// Curve index used per slot (dry volume, game wet, user wet, LPF, HPF, spread, focus), `-1` for none.
	pub curve_slots: [i8; ATTENUATION_CURVE_SLOTS],
	/// Distance curves.
	pub curves: Vec<AttenuationCurve>,
	/// RTPC bindings.
	pub rtpcs: Vec<RtpcBinding>,
}

/// Directional cone attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
	/// Inside angle (degrees).
	pub inside_degrees: f32,
	/// Outside angle (degrees).
	pub outside_degrees: f32,
	/// Volume outside the cone (dB).
	pub outside_volume: f32,
	/// Low-pass amount outside the cone.
	pub low_pass: f32,
	/// High-pass amount outside the cone.
	pub high_pass: f32,
}

/// One distance curve.
#[derive(Debug, Clone, PartialEq)]
pub struct AttenuationCurve {
	/// Y-axis scaling.
	pub scaling: CurveScaling,
	/// Curve points.
	pub points: Vec<CurvePoint>,
}

impl Attenuation {
	/// Decode an attenuation body.
	pub fn parse(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Self> {
		let cone_bits = cursor.read_u8()?;
		let cone = if cone_bits & 1 != 0 {
			Some(Cone {
				inside_degrees: cursor.read_f32_le()?,
				outside_degrees: cursor.read_f32_le()?,
				outside_volume: cursor.read_f32_le()?,
				low_pass: cursor.read_f32_le()?,
				high_pass: cursor.read_f32_le()?,
			})
		} else {
			None
		};

		let mut curve_slots = [0_i8; ATTENUATION_CURVE_SLOTS];
		for slot in &mut curve_slots {
			*slot = cursor.read_i8()?;
		}

		let count = cursor.read_u8()?;
		let mut curves = Vec::with_capacity(usize::from(count));
		for _ in 0..count {
			let scaling = CurveScaling::from_u8(cursor.read_u8()?);
			let points = parse_curve_points_u16(cursor, opt)?;
			curves.push(AttenuationCurve { scaling, points });
		}

		let rtpcs = parse_rtpcs(cursor, opt)?;

		Ok(Self {
			cone,
			curve_slots,
			curves,
			rtpcs,
		})
	}

	/// Curve assigned to a slot, if any.
	pub fn curve_for_slot(&self, slot: usize) -> Option<&AttenuationCurve> {
		let index = *self.curve_slots.get(slot)?;
		let index = usize::try_from(index).ok()?;
		self.curves.get(index)
	}
}
