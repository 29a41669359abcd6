//! Public library API for decoding SoundBank containers.

/// Chunk scanning, fixed-layout chunk decoders, HIRC record decoding, and hierarchy linking.
pub mod bank;
