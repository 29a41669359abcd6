use std::collections::BTreeMap;
use std::path::PathBuf;

use bnkdoc::bank::{ChunkTag, ObjectKind, Result};

use crate::cmd::util::{emit_json, open_bank};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub strict: bool,
	#[arg(long)]
	pub json: bool,
}

/// Print header fields, chunk layout, and per-kind object counts.
pub fn run(args: Args) -> Result<()> {
	let Args { path, strict, json } = args;

	let mut bank = open_bank(&path, strict)?;
	let stats = bank.scan_chunk_stats()?;
	let chunks = bank
		.chunks()
		.map(|chunk| {
			chunk.map(|chunk| ChunkJson {
				tag: chunk.tag.to_string(),
				offset: chunk.offset,
				len: chunk.payload.len(),
			})
		})
		.collect::<Result<Vec<_>>>()?;

	let header = bank.header()?.map(|header| (header.version, header.bank_id));
	let media_count = bank.media_index()?.map_or(0, |index| index.entries.len());
	let referenced_banks = bank.strings()?.map_or_else(Vec::new, |strings| {
		strings
			.entries
			.iter()
			.map(|entry| BankNameJson {
				bank_id: entry.bank_id,
				name: entry.name.clone(),
			})
			.collect()
	});

	let mut kinds: BTreeMap<ObjectKind, usize> = BTreeMap::new();
	let object_count = match bank.hierarchy()? {
		Some(hirc) => {
			for object in &hirc.objects {
				*kinds.entry(object.kind).or_insert(0) += 1;
			}
			hirc.len()
		}
		None => 0,
	};

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			version: header.map(|(version, _)| version),
			bank_id: header.map(|(_, bank_id)| bank_id),
			chunk_count: stats.chunk_count,
			payload_bytes: stats.payload_bytes,
			chunks,
			duplicates: stats.duplicates().iter().map(ChunkTag::to_string).collect(),
			object_count,
			kinds: kinds
				.iter()
				.map(|(kind, count)| KindCountJson {
					kind: kind.as_str(),
					tag: kind.as_u8(),
					count: *count,
				})
				.collect(),
			media_count,
			referenced_banks,
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	match header {
		Some((version, bank_id)) => {
			println!("version: {version}");
			println!("bank_id: {bank_id}");
		}
		None => println!("header: missing"),
	}
	println!("chunk_count: {}", stats.chunk_count);
	println!("payload_bytes: {}", stats.payload_bytes);
	println!("chunks:");
	for chunk in &chunks {
		println!("  {}\toffset={}\tlen={}", chunk.tag, chunk.offset, chunk.len);
	}
	for tag in stats.duplicates() {
		println!("duplicate_tag: {tag} (only the first is decoded)");
	}
	println!("objects: {object_count}");
	for (kind, count) in &kinds {
		println!("  {}({}): {}", kind.as_str(), kind.as_u8(), count);
	}
	println!("embedded_media: {media_count}");
	for entry in &referenced_banks {
		println!("referenced_bank: {} {}", entry.bank_id, entry.name);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	version: Option<u32>,
	bank_id: Option<u32>,
	chunk_count: u32,
	payload_bytes: u64,
	chunks: Vec<ChunkJson>,
	duplicates: Vec<String>,
	object_count: usize,
	kinds: Vec<KindCountJson>,
	media_count: usize,
	referenced_banks: Vec<BankNameJson>,
}

#[derive(serde::Serialize)]
struct ChunkJson {
	tag: String,
	offset: usize,
	len: usize,
}

#[derive(serde::Serialize)]
struct KindCountJson {
	kind: &'static str,
	tag: u8,
	count: usize,
}

#[derive(serde::Serialize)]
struct BankNameJson {
	bank_id: u32,
	name: String,
}
