use std::path::PathBuf;

use bnkdoc::bank::{ChunkTag, DecodedSection, Result, SoundBank};

use crate::cmd::util::hex_preview;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Chunk tag, up to four ASCII characters.
	#[arg(long)]
	pub tag: String,
	/// Bytes shown in the hex preview.
	#[arg(long, default_value_t = 64)]
	pub preview: usize,
}

/// Print the size and a hex preview of one raw chunk.
pub fn run(args: Args) -> Result<()> {
	let Args { path, tag, preview } = args;

	let tag = ChunkTag::parse(&tag)?;
	let bank = SoundBank::open(&path)?;
	let payload = bank.require_chunk(tag)?;

	println!("path: {}", path.display());
	println!("tag: {tag}");
	println!("len: {}", payload.len());
	println!("decoder: {}", if DecodedSection::is_supported(tag) { "structural" } else { "raw" });
	println!("bytes: {}", hex_preview(payload, preview));

	Ok(())
}
