use bnkdoc_testkit::{ByteWriter, actor_mixer_body, bus_body, hirc_payload, hirc_record, kind, plain_audio_properties, sound_body};

use crate::bank::BankError;
use crate::bank::hirc::{
	ActionParams, CurveScaling, CurveShape, DecodeOptions, DuckInfo, GroupType, HircBody, HircChunk, ObjectKind, PathMode, PlaylistMode, PluginType, PositionSource, PropValue, PropertyId,
	RtpcSource, RtpcTarget, SyncType,
};

fn parse(payload: &[u8]) -> HircChunk {
	HircChunk::parse(payload, &DecodeOptions::default()).expect("hirc decodes")
}

/// Audio properties block with caller-supplied positioning and aux send bytes.
fn props_with(positioning: &[u8], aux: &[u8]) -> Vec<u8> {
	let mut writer = ByteWriter::new();
	writer
		.u8(0)
		.u8(0)
		.u32(0)
		.u32(0)
		.u8(0)
		.u8(0)
		.u8(0)
		.bytes(positioning)
		.bytes(aux)
		.u8(0)
		.u8(0)
		.u16(0)
		.u8(0)
		.u8(0)
		.u32(0)
		.u16(0);
	writer.into_bytes()
}

fn actor_mixer_from_props(props: &[u8]) -> Vec<u8> {
	let mut writer = ByteWriter::new();
	writer.bytes(props).u32(0);
	writer.into_bytes()
}

#[test]
fn unknown_and_undecoded_kinds_keep_exact_body_bytes() {
	let unknown = [0xde, 0xad, 0xbe, 0xef, 0x01];
	let music_track = [7, 7, 7];
	let payload = hirc_payload(&[hirc_record(200, 0x1111, &unknown), hirc_record(11, 0x2222, &music_track)]);

	let chunk = parse(&payload);
	assert_eq!(chunk.len(), 2);

	let first = &chunk.objects[0];
	assert_eq!(first.kind, ObjectKind::Unknown(200));
	assert_eq!(first.id, 0x1111);
	assert_eq!(first.opaque_bytes(), Some(&unknown[..]));
	assert!(first.trailing.is_empty());

	let second = &chunk.objects[1];
	assert_eq!(second.kind, ObjectKind::MusicTrack);
	assert!(!second.kind.is_decoded());
	assert_eq!(second.opaque_bytes(), Some(&music_track[..]));
}

#[test]
fn decoded_records_consume_exactly_their_declared_length() {
	let payload = hirc_payload(&[
		hirc_record(kind::ACTOR_MIXER, 10, &actor_mixer_body(0, &[11, 12])),
		hirc_record(kind::SOUND, 11, &sound_body(10, 500)),
		hirc_record(kind::SOUND, 12, &sound_body(10, 501)),
		hirc_record(kind::BUS, 20, &bus_body(0)),
		hirc_record(kind::AUX_BUS, 21, &bus_body(20)),
	]);

	let chunk = parse(&payload);
	assert_eq!(chunk.len(), 5);
	for object in &chunk.objects {
		assert!(object.trailing.is_empty(), "record {} left bytes", object.id);
	}

	let mixer = chunk.get(10).expect("mixer present");
	assert_eq!(mixer.kind, ObjectKind::ActorMixer);
	assert_eq!(mixer.children(), &[11, 12]);
	assert_eq!(mixer.parent_id(), 0);

	let sound = chunk.get(12).expect("sound present");
	assert_eq!(sound.parent_id(), 10);
	let HircBody::Sound(body) = &sound.body else {
		panic!("expected sound body, got {:?}", sound.body);
	};
	assert_eq!(body.source_id, 501);
	assert_eq!(body.plugin_type(), PluginType::Codec);
	assert!(body.plugin_params.is_none());

	let aux = chunk.get(21).expect("aux bus present");
	assert_eq!(aux.kind, ObjectKind::AuxBus);
	assert_eq!(aux.parent_id(), 20);
	assert_eq!(chunk.buses().count(), 2);
	assert_eq!(chunk.of_kind(ObjectKind::Sound).count(), 2);
	assert_eq!(sound.offset, chunk.objects[1].offset + 5 + chunk.objects[1].declared_len as usize);
}

#[test]
fn record_longer_than_chunk_is_truncated_record() {
	let mut writer = ByteWriter::new();
	writer.u32(1).u8(kind::EVENT).u32(64).u32(7).u32(0);
	let payload = writer.into_bytes();

	let err = HircChunk::parse(&payload, &DecodeOptions::default()).expect_err("record overruns chunk");
	assert!(matches!(
		err,
		BankError::TruncatedRecord {
			index: 0,
			id: None,
			at: 9,
			need: 64,
			rem: 8
		}
	));
}

#[test]
fn missing_records_are_truncated_record() {
	let payload = hirc_payload(&[hirc_record(kind::EVENT, 1, &[0, 0, 0, 0])]);
	let mut patched = payload.clone();
	patched[..4].copy_from_slice(&2_u32.to_le_bytes());

	let err = HircChunk::parse(&patched, &DecodeOptions::default()).expect_err("second record missing");
	assert!(matches!(err, BankError::TruncatedRecord { index: 1, id: None, .. }));
}

#[test]
fn body_read_past_record_end_is_truncated_record() {
	// The mixer lists two children but only carries one id; the next record
	// must not be read as the missing child.
	let mut body = actor_mixer_body(0, &[11, 12]);
	body.truncate(body.len() - 4);
	let payload = hirc_payload(&[hirc_record(kind::ACTOR_MIXER, 10, &body), hirc_record(kind::EVENT, 99, &[0, 0, 0, 0])]);

	let err = HircChunk::parse(&payload, &DecodeOptions::default()).expect_err("children overrun record");
	let BankError::TruncatedRecord { index, id, at, need, rem } = err else {
		panic!("expected truncated record, got {err:?}");
	};
	assert_eq!(index, 0);
	assert_eq!(id, Some(10));
	assert_eq!(need, 4);
	assert_eq!(rem, 0);
	assert_eq!(at, 4 + 5 + 4 + body.len());
}

#[test]
fn declared_length_shorter_than_id_is_overrun() {
	let mut writer = ByteWriter::new();
	writer.u32(1).u8(kind::EVENT).u32(2).bytes(&[0, 0]);
	let payload = writer.into_bytes();

	let err = HircChunk::parse(&payload, &DecodeOptions::default()).expect_err("id overruns record");
	assert!(matches!(
		err,
		BankError::OverrunRecord {
			index: 0,
			id: None,
			declared: 2,
			consumed: 4
		}
	));
}

#[test]
fn trailing_bytes_are_kept_unless_strict() {
	let mut body = actor_mixer_body(0, &[]);
	body.extend_from_slice(&[0xaa, 0xbb]);
	let payload = hirc_payload(&[hirc_record(kind::ACTOR_MIXER, 5, &body), hirc_record(kind::EVENT, 6, &[0, 0, 0, 0])]);

	let chunk = parse(&payload);
	assert_eq!(chunk.objects[0].trailing, vec![0xaa, 0xbb]);
	assert_eq!(chunk.objects[1].id, 6);

	let err = HircChunk::parse(&payload, &DecodeOptions::strict()).expect_err("strict rejects leftovers");
	assert!(matches!(
		err,
		BankError::RecordUnderrun {
			id: 5,
			kind: kind::ACTOR_MIXER,
			leftover: 2
		}
	));
}

#[test]
fn oversized_counts_are_rejected() {
	let mut writer = ByteWriter::new();
	writer.u32(1_000_000);
	let payload = hirc_payload(&[hirc_record(kind::EVENT, 3, &writer.into_bytes())]);

	let opt = DecodeOptions {
		max_array_elems: 16,
		..DecodeOptions::default()
	};
	let err = HircChunk::parse(&payload, &opt).expect_err("count exceeds limit");
	assert!(matches!(
		err,
		BankError::ArrayTooLarge {
			at: 13,
			count: 1_000_000,
			max: 16
		}
	));
}

#[test]
fn user_defined_positioning_reads_path_block_and_aux_ids() {
	let mut positioning = ByteWriter::new();
	positioning
		.u8(0b1110)
		// panner
		.u8(1)
		// 3d bits, attenuation id
		.u8(0b0000_0011)
		.u32(77)
		// path mode, transition time
		.u8(1)
		.i32(500)
		// one vertex
		.u32(1)
		.f32(1.0)
		.f32(2.0)
		.f32(3.0)
		.i32(100)
		// one playlist item
		.u32(1)
		.u32(0)
		.u32(1)
		// no ranges
		.u32(0);
	let mut aux = ByteWriter::new();
	aux.u8(0b1000).u32(1).u32(2).u32(3).u32(4);

	let body = actor_mixer_from_props(&props_with(&positioning.into_bytes(), &aux.into_bytes()));
	let chunk = parse(&hirc_payload(&[hirc_record(kind::ACTOR_MIXER, 1, &body)]));
	let object = &chunk.objects[0];
	assert!(object.trailing.is_empty());

	let props = object.audio_properties().expect("mixer has audio properties");
	assert!(!props.positioning.override_parent);
	assert_eq!(props.positioning.panner_enabled, Some(true));
	let three_d = props.positioning.three_d.as_ref().expect("3d block present");
	assert!(three_d.spatialize);
	assert!(three_d.attenuation_enabled);
	assert!(!three_d.dynamic);
	assert_eq!(three_d.attenuation_id, 77);
	let PositionSource::UserDefined(path) = &three_d.source else {
		panic!("expected automation path, got {:?}", three_d.source);
	};
	assert_eq!(path.mode, PathMode::from_u8(1));
	assert_eq!(path.transition_ms, 500);
	assert_eq!(path.vertices.len(), 1);
	assert_eq!(path.vertices[0].duration_ms, 100);
	assert_eq!(path.playlist.len(), 1);
	assert!(path.ranges.is_empty());

	assert_eq!(props.aux.aux_bus_ids, Some([1, 2, 3, 4]));
	assert!(!props.aux.override_game_aux);
}

#[test]
fn cleared_flags_skip_gated_blocks() {
	// 3D without the user-defined bit: no panner byte, no path block.
	let mut positioning = ByteWriter::new();
	positioning.u8(0b0101).u8(0).u32(9);
	let body = actor_mixer_from_props(&props_with(&positioning.into_bytes(), &[0b0011]));

	let chunk = parse(&hirc_payload(&[hirc_record(kind::ACTOR_MIXER, 1, &body)]));
	let props = chunk.objects[0].audio_properties().expect("mixer has audio properties");
	assert!(props.positioning.override_parent);
	assert_eq!(props.positioning.panner_enabled, None);
	let three_d = props.positioning.three_d.as_ref().expect("3d block present");
	assert_eq!(three_d.attenuation_id, 9);
	assert_eq!(three_d.source, PositionSource::GameDefined);
	assert!(props.aux.override_game_aux);
	assert!(props.aux.use_game_aux);
	assert_eq!(props.aux.aux_bus_ids, None);
	assert!(chunk.objects[0].trailing.is_empty());
}

#[test]
fn gated_block_past_record_end_is_truncated_record() {
	// The aux flag promises four bus ids that the record does not carry.
	let body = props_with(&[0], &[0b1000]);
	let payload = hirc_payload(&[hirc_record(kind::ACTOR_MIXER, 4, &body)]);

	let err = HircChunk::parse(&payload, &DecodeOptions::default()).expect_err("aux ids overrun record");
	assert!(matches!(err, BankError::TruncatedRecord { index: 0, id: Some(4), .. }));
}

#[test]
fn effects_properties_and_rtpcs_decode_by_type_tag() {
	let mut writer = ByteWriter::new();
	writer
		// effects: override, one slot, bypass bit 0
		.u8(1)
		.u8(1)
		.u8(0b0000_0001)
		.u8(0)
		.u32(55)
		.u8(1)
		.u8(0)
		.u32(30)
		.u32(0)
		.u8(0)
		// props: volume (float), loop count (int), attenuation id (uint)
		.u8(3)
		.bytes(&[0, 9, 26])
		.f32(-3.0)
		.i32(2)
		.u32(0xffff_fff0)
		// one ranged modifier on pitch
		.u8(1)
		.u8(2)
		.f32(-100.0)
		.f32(100.0)
		// positioning, aux, limit, hdr
		.u8(0)
		.u8(0)
		.u8(0b0000_0001)
		.u8(2)
		.u16(8)
		.u8(1)
		.u8(0)
		// state groups: one group with one custom state
		.u32(1)
		.u32(100)
		.u8(0)
		.u16(1)
		.u32(101)
		.u32(102)
		// rtpcs: game parameter 9 on volume, dB scaling, two points
		.u16(1)
		.u8(0)
		.u32(9)
		.u8(0)
		.u32(3)
		.u8(2)
		.u16(2)
		.f32(0.0)
		.f32(-96.0)
		.u8(4)
		.bytes(&[0, 0, 0])
		.f32(100.0)
		.f32(0.0)
		.u8(4)
		.bytes(&[0, 0, 0])
		// children
		.u32(0);

	let chunk = parse(&hirc_payload(&[hirc_record(kind::ACTOR_MIXER, 1, &writer.into_bytes())]));
	let object = &chunk.objects[0];
	assert!(object.trailing.is_empty());
	let props = object.audio_properties().expect("mixer has audio properties");

	assert!(props.effects.override_parent);
	assert_eq!(props.effects.effects.len(), 1);
	assert_eq!(props.effects.effects[0].fx_id, 55);
	assert!(props.effects.effects[0].is_share_set);
	assert!(props.effects.is_bypassed(0));
	assert!(!props.effects.is_bypassed(1));
	assert_eq!(props.output_bus_id, 30);

	assert_eq!(props.props.get(PropertyId::VOLUME), Some(PropValue::Float(-3.0)));
	assert_eq!(props.props.get(PropertyId::LOOP_COUNT), Some(PropValue::Int(2)));
	assert_eq!(props.props.get(PropertyId::ATTENUATION_ID), Some(PropValue::Uint(0xffff_fff0)));
	assert_eq!(props.ranged.len(), 1);
	assert_eq!(props.ranged[0].id, PropertyId::PITCH);
	assert_eq!(props.ranged[0].max, 100.0);

	assert!(props.limit.kill_newest);
	assert_eq!(props.limit.max_instances, 8);

	assert_eq!(props.state_groups.len(), 1);
	assert_eq!(props.state_groups[0].group_id, 100);
	assert_eq!(props.state_groups[0].states[0].state_object_id, 102);

	assert_eq!(props.rtpcs.len(), 1);
	let rtpc = &props.rtpcs[0];
	assert_eq!(rtpc.source, RtpcSource::GameParameter(9));
	assert_eq!(rtpc.target, RtpcTarget::Volume);
	assert_eq!(rtpc.curve_id, 3);
	assert_eq!(rtpc.scaling, CurveScaling::Db);
	assert_eq!(rtpc.points.len(), 2);
	assert_eq!(rtpc.points[0].y, -96.0);
	assert_eq!(rtpc.points[1].shape, CurveShape::from_u8(4));
}

#[test]
fn source_plugin_carries_parameter_blob() {
	let mut writer = ByteWriter::new();
	writer
		.u32(0x0065_0002)
		.u8(0)
		.u32(0)
		.u32(0)
		.u8(1)
		.u32(3)
		.bytes(&[1, 2, 3])
		.bytes(&props_with(&[0], &[0]));

	let chunk = parse(&hirc_payload(&[hirc_record(kind::SOUND, 8, &writer.into_bytes())]));
	let HircBody::Sound(sound) = &chunk.objects[0].body else {
		panic!("expected sound body");
	};
	assert_eq!(sound.plugin_type(), PluginType::Source);
	assert_eq!(sound.plugin_params.as_deref(), Some(&[1, 2, 3][..]));
	assert!(sound.is_language_specific());
	assert!(chunk.objects[0].trailing.is_empty());
}

#[test]
fn action_parameters_follow_operation_code() {
	let mut set_state = ByteWriter::new();
	set_state.u16(0x1204).u32(0).u8(0).u8(0).u8(0).u32(10).u32(20);

	let mut stop = ByteWriter::new();
	stop.u16(0x0103).u32(40).u8(0).u8(1).u8(24).i32(1500).u8(0).u8(4).u8(0).u32(1).u32(41).u8(1);

	let mut other = ByteWriter::new();
	other.u16(0x7f03).u32(40).u8(0).u8(0).u8(0).bytes(&[9, 8, 7]);

	let payload = hirc_payload(&[
		hirc_record(kind::ACTION, 1, &set_state.into_bytes()),
		hirc_record(kind::ACTION, 2, &stop.into_bytes()),
		hirc_record(kind::ACTION, 3, &other.into_bytes()),
	]);
	let chunk = parse(&payload);

	let HircBody::Action(action) = &chunk.objects[0].body else {
		panic!("expected action body");
	};
	assert_eq!(action.params, ActionParams::SetState { group_id: 10, state_id: 20 });

	let HircBody::Action(action) = &chunk.objects[1].body else {
		panic!("expected action body");
	};
	assert_eq!(action.target_id, 40);
	assert_eq!(action.props.get(PropertyId::TRANSITION_TIME), Some(PropValue::Int(1500)));
	let ActionParams::Stop(params) = &action.params else {
		panic!("expected stop params, got {:?}", action.params);
	};
	assert_eq!(params.fade_curve, 4);
	assert_eq!(params.exceptions.len(), 1);
	assert_eq!(params.exceptions[0].id, 41);
	assert!(params.exceptions[0].is_bus);

	let HircBody::Action(action) = &chunk.objects[2].body else {
		panic!("expected action body");
	};
	assert_eq!(action.params, ActionParams::Raw(vec![9, 8, 7]));
	assert!(chunk.objects.iter().all(|object| object.trailing.is_empty()));
}

#[test]
fn kind_tags_round_trip() {
	for raw in 0..=u8::MAX {
		assert_eq!(ObjectKind::from_u8(raw).as_u8(), raw);
	}
	assert_eq!(ObjectKind::from_u8(0), ObjectKind::Unknown(0));
	assert_eq!(ObjectKind::from_u8(23), ObjectKind::Unknown(23));
	assert_eq!(ObjectKind::from_u8(18).as_str(), "aux_bus");
}

#[test]
fn switch_container_decodes_assignments_and_params() {
	let mut writer = ByteWriter::new();
	writer
		.bytes(&plain_audio_properties(1, 0))
		.u8(1)
		.u32(0xAA)
		.u32(0xBB)
		.u8(1)
		// children
		.u32(2)
		.u32(20)
		.u32(21)
		// one switch with one node
		.u32(1)
		.u32(0xBB)
		.u32(1)
		.u32(20)
		// one param entry
		.u32(1)
		.u32(21)
		.u8(0b10)
		.u8(3)
		.i32(250)
		.i32(-1);
	let chunk = parse(&hirc_payload(&[hirc_record(kind::SWITCH, 9, &writer.into_bytes())]));
	let object = &chunk.objects[0];
	assert!(object.trailing.is_empty());
	assert_eq!(object.parent_id(), 1);
	assert_eq!(object.children(), &[20, 21]);

	let HircBody::SwitchContainer(switch) = &object.body else {
		panic!("expected switch container, got {:?}", object.body);
	};
	assert_eq!(switch.group_type, GroupType::State);
	assert_eq!(switch.group_id, 0xAA);
	assert!(switch.continuous_validation);
	assert_eq!(switch.switches[0].node_ids, vec![20]);
	let params = switch.params[0];
	assert!(!params.first_only);
	assert!(params.continue_playback);
	assert_eq!(params.mode_bits, 3);
	assert_eq!((params.fade_out_ms, params.fade_in_ms), (250, -1));
}

#[test]
fn random_sequence_container_reads_playlist() {
	let mut writer = ByteWriter::new();
	writer
		.bytes(&plain_audio_properties(0, 0))
		.u16(2)
		.u16(0)
		.u16(0)
		.f32(1.5)
		.f32(0.0)
		.f32(0.0)
		.u16(1)
		.u8(0)
		.u8(0)
		.u8(1)
		.u8(0b1001)
		.u32(1)
		.u32(30)
		.u16(1)
		.u32(30)
		.i32(50_000);
	let chunk = parse(&hirc_payload(&[hirc_record(kind::RANDOM_SEQUENCE, 8, &writer.into_bytes())]));
	let HircBody::RandomSequenceContainer(container) = &chunk.objects[0].body else {
		panic!("expected random/sequence container");
	};
	assert_eq!(container.loop_count, 2);
	assert_eq!(container.mode, PlaylistMode::Sequence);
	assert!(container.using_weight);
	assert!(container.continuous);
	assert!(!container.global);
	assert_eq!(container.playlist.len(), 1);
	assert_eq!(container.playlist[0].weight, 50_000);
	assert!(chunk.objects[0].trailing.is_empty());
}

#[test]
fn layer_container_reads_crossfade_associations() {
	let mut writer = ByteWriter::new();
	writer
		.bytes(&plain_audio_properties(0, 0))
		.u32(1)
		.u32(40)
		// one layer, no rtpcs
		.u32(1)
		.u32(0x11)
		.u16(0)
		.u32(0x22)
		.u8(0)
		.u32(1)
		.u32(40)
		.u32(2)
		.f32(0.0)
		.f32(1.0)
		.u8(4)
		.bytes(&[0; 3])
		.f32(100.0)
		.f32(0.0)
		.u8(9)
		.bytes(&[0; 3])
		.u8(0);
	let chunk = parse(&hirc_payload(&[hirc_record(kind::LAYER, 7, &writer.into_bytes())]));
	let HircBody::LayerContainer(container) = &chunk.objects[0].body else {
		panic!("expected layer container");
	};
	assert_eq!(container.children, vec![40]);
	let layer = &container.layers[0];
	assert_eq!(layer.crossfade_param_id, 0x22);
	let points = &layer.associations[0].points;
	assert_eq!(points.len(), 2);
	assert_eq!(points[0].shape, CurveShape::Linear);
	assert_eq!(points[1].shape, CurveShape::Constant);
	assert!(!container.continuous_validation);
}

#[test]
fn attenuation_maps_slots_to_curves() {
	let mut writer = ByteWriter::new();
	writer
		.u8(1)
		.f32(90.0)
		.f32(180.0)
		.f32(-6.0)
		.f32(0.0)
		.f32(0.0)
		.i8(0)
		.i8(-1)
		.i8(-1)
		.i8(0)
		.i8(-1)
		.i8(-1)
		.i8(5)
		.u8(1)
		.u8(2)
		.u16(1)
		.f32(0.0)
		.f32(-96.0)
		.u8(4)
		.bytes(&[0; 3])
		.u16(0);
	let chunk = parse(&hirc_payload(&[hirc_record(kind::ATTENUATION, 6, &writer.into_bytes())]));
	let object = &chunk.objects[0];
	assert!(object.trailing.is_empty());
	assert!(object.audio_properties().is_none());

	let HircBody::Attenuation(attenuation) = &object.body else {
		panic!("expected attenuation");
	};
	assert_eq!(attenuation.cone.map(|cone| cone.outside_volume), Some(-6.0));
	assert_eq!(attenuation.curves.len(), 1);
	assert_eq!(attenuation.curves[0].scaling, CurveScaling::Db);
	assert!(attenuation.curve_for_slot(0).is_some());
	assert!(attenuation.curve_for_slot(3).is_some());
	assert!(attenuation.curve_for_slot(1).is_none());
	// slot points past the curve list
	assert!(attenuation.curve_for_slot(6).is_none());
	assert!(attenuation.curve_for_slot(7).is_none());
}

#[test]
fn bus_reads_ducks_before_effects_and_rtpcs_before_state_groups() {
	let mut writer = ByteWriter::new();
	writer
		.u32(0x10)
		// props: volume
		.u8(1)
		.u8(0)
		.f32(-6.0)
		// positioning: 3D game-defined, spatialize + attenuation
		.u8(0b0000_0100)
		.u8(0b0000_0011)
		.u32(0x77)
		// aux sends: override user aux, has aux
		.u8(0b0000_1100)
		.u32(1)
		.u32(2)
		.u32(3)
		.u32(4)
		// bus bits: kill newest, background music
		.u8(0b0000_1001)
		.u16(32)
		.u32(0x3_0000)
		// hdr bits: release exponential only
		.u8(0b0000_0010)
		.i32(400)
		.f32(-12.0)
		// one duck
		.u32(1)
		.u32(0x20)
		.f32(-9.0)
		.i32(100)
		.i32(200)
		.u8(4)
		.u8(5)
		// effects: one slot, bypass all
		.u8(0)
		.u8(1)
		.u8(0b0001_0000)
		.u8(2)
		.u32(0x88)
		.u8(0)
		.u8(1)
		// rtpcs: LFO 3 on high-pass, one point
		.u16(1)
		.u8(2)
		.u32(3)
		.u8(4)
		.u32(6)
		.u8(0)
		.u16(1)
		.f32(0.5)
		.f32(1.0)
		.u8(1)
		.bytes(&[0; 3])
		// state groups: one group synced on bar, one state
		.u32(1)
		.u32(0x40)
		.u8(2)
		.u16(1)
		.u32(0x41)
		.u32(0x42);
	let chunk = parse(&hirc_payload(&[hirc_record(kind::BUS, 0x99, &writer.into_bytes())]));
	let object = &chunk.objects[0];
	assert!(object.trailing.is_empty());
	assert_eq!(object.parent_id(), 0x10);
	let bus = object.as_bus().expect("bus body");

	assert_eq!(bus.props.get(PropertyId::VOLUME), Some(PropValue::Float(-6.0)));

	assert!(!bus.positioning.override_parent);
	assert_eq!(bus.positioning.panner_enabled, None);
	let three_d = bus.positioning.three_d.as_ref().expect("3D block");
	assert!(three_d.spatialize);
	assert!(three_d.attenuation_enabled);
	assert!(!three_d.hold_emitter);
	assert_eq!(three_d.attenuation_id, 0x77);
	assert!(matches!(three_d.source, PositionSource::GameDefined));

	assert!(!bus.aux.override_game_aux);
	assert!(bus.aux.override_user_aux);
	assert_eq!(bus.aux.aux_bus_ids, Some([1, 2, 3, 4]));

	assert!(bus.kill_newest);
	assert!(!bus.use_virtual_behavior);
	assert!(!bus.ignore_parent_max_instances);
	assert!(bus.background_music);
	assert_eq!(bus.max_instances, 32);
	assert_eq!(bus.channel_config, 0x3_0000);
	assert!(!bus.is_hdr_bus);
	assert!(bus.hdr_release_exponential);
	assert_eq!(bus.recovery_time_ms, 400);
	assert_eq!(bus.max_duck_volume, -12.0);

	assert_eq!(
		bus.ducks,
		vec![DuckInfo {
			bus_id: 0x20,
			volume: -9.0,
			fade_out_ms: 100,
			fade_in_ms: 200,
			fade_curve: 4,
			target_prop: 5,
		}]
	);

	assert!(!bus.effects.override_parent);
	assert_eq!(bus.effects.effects.len(), 1);
	assert_eq!(bus.effects.effects[0].slot, 2);
	assert_eq!(bus.effects.effects[0].fx_id, 0x88);
	assert!(!bus.effects.effects[0].is_share_set);
	assert!(bus.effects.effects[0].is_rendered);
	assert!(bus.effects.is_bypassed(3));

	assert_eq!(bus.rtpcs.len(), 1);
	let rtpc = &bus.rtpcs[0];
	assert_eq!(rtpc.source, RtpcSource::Lfo(3));
	assert_eq!(rtpc.target, RtpcTarget::HighPassFilter);
	assert_eq!(rtpc.curve_id, 6);
	assert_eq!(rtpc.scaling, CurveScaling::None);
	assert_eq!(rtpc.points.len(), 1);
	assert_eq!(rtpc.points[0].shape, CurveShape::Sine);

	assert_eq!(bus.state_groups.len(), 1);
	let group = &bus.state_groups[0];
	assert_eq!(group.group_id, 0x40);
	assert_eq!(group.sync, SyncType::NextBar);
	assert_eq!(group.states[0].state_id, 0x41);
	assert_eq!(group.states[0].state_object_id, 0x42);
}
