mod bytes;
mod chunk;
mod error;
mod file;
mod game_state;
mod header;
mod hierarchy;
mod hirc;
mod media_index;
mod short_id;
mod strings;

/// Bounded little-endian reader used by every decoder.
pub use bytes::Cursor;
/// Chunk tags, chunk scanning, and first-match lookup.
pub use chunk::{CHUNK_HEADER_SIZE, Chunk, ChunkIter, ChunkTag, find_chunk};
/// Error and result aliases.
pub use error::{BankError, Result};
/// Decode context with per-tag section cache.
pub use file::{ChunkStats, DecodedSection, SoundBank};
/// Global game state (`STMG`) types.
pub use game_state::{GameParameter, GameState, StateGroup, StateTransition, SwitchGroup, SwitchPoint};
/// Bank header (`BKHD`).
pub use header::BankHeader;
/// Arena forest and hierarchy builders.
pub use hierarchy::{
	Forest, HierarchyBuilder, HierarchyItem, HierarchyNode, MASTER_AUDIO_BUS_ID, MASTER_SECONDARY_BUS_ID, MasterBusHierarchy, MasterBusHierarchyBuilder,
	NO_PARENT, NodeId, build_actor_hierarchy, build_master_bus_hierarchy,
};
/// HIRC record dispatcher, object kinds, and decode options.
pub use hirc::{DecodeOptions, HircBody, HircChunk, HircObject, ObjectKind};
/// Type-specific HIRC bodies.
pub use hirc::{
	Action, ActionException, ActionParams, ActiveParams, ActorMixer, Attenuation, AttenuationCurve, Bus, DuckInfo, Event, GroupType, Layer, LayerAssociation,
	LayerContainer, PlaylistItem, PlaylistMode, RandomSequenceContainer, Sound, SwitchAssignment, SwitchContainer, SwitchNodeParams,
};
/// Shared conditional-field blocks embedded in HIRC bodies.
pub use hirc::{
	ATTENUATION_CURVE_SLOTS, AudioProperties, AutomationPath, AuxSends, BehaviorFlags, BelowThresholdBehavior, Cone, CurvePoint, CurveScaling, CurveShape,
	CustomState, EffectChain, EffectSlot, HdrFlags, PathMode, PathPlaylistItem, PathRange, PathVertex, PlaybackLimit, PluginType, PositionSource, Positioning,
	Positioning3d, PropBundle, PropValue, PropertyId, PropertyValueKind, RangedModifier, RtpcBinding, RtpcSource, RtpcTarget, StateGroupBinding, StreamType,
	SyncType, USER_AUX_SEND_COUNT, VirtualQueueBehavior,
};
/// Embedded media index (`DIDX`).
pub use media_index::{MediaEntry, MediaIndex};
/// Name-derived 32-bit ids.
pub use short_id::short_id;
/// Referenced bank names (`STID`).
pub use strings::{BankName, BankStrings};
