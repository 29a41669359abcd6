use std::path::PathBuf;

use bnkdoc::bank::{BankError, ChunkTag, HircObject, ObjectKind, Result};

use crate::cmd::util::{emit_json, hex_preview, open_bank, parse_object_id};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Raw object kind tag to keep.
	#[arg(long)]
	pub kind: Option<u8>,
	/// Object id, decimal or `0x` hex.
	#[arg(long)]
	pub id: Option<String>,
	#[arg(long)]
	pub limit: Option<usize>,
	#[arg(long)]
	pub strict: bool,
	#[arg(long)]
	pub json: bool,
}

/// Print one line per decoded hierarchy object.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		kind,
		id,
		limit,
		strict,
		json,
	} = args;

	let id = id.as_deref().map(parse_object_id).transpose()?;
	let mut bank = open_bank(&path, strict)?;
	let hirc = bank.hierarchy()?.ok_or(BankError::ChunkNotFound { tag: ChunkTag::HIRC })?;

	let mut rows: Vec<(usize, &HircObject)> = hirc
		.objects
		.iter()
		.enumerate()
		.filter(|(_, object)| kind.is_none_or(|kind| object.kind == ObjectKind::from_u8(kind)))
		.filter(|(_, object)| id.is_none_or(|id| object.id == id))
		.collect();
	if let Some(limit) = limit {
		rows.truncate(limit);
	}

	if json {
		let payload = ObjectsJson {
			path: path.display().to_string(),
			count: rows.len(),
			objects: rows.iter().map(|(index, object)| object_json(*index, object)).collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("objects: {}", rows.len());
	println!("index\tid\tkind\tlen\tparent\tchildren\ttrailing");
	for (index, object) in &rows {
		println!(
			"{}\t{}\t{}({})\t{}\t{}\t{}\t{}",
			index,
			object.id,
			object.kind.as_str(),
			object.kind.as_u8(),
			object.declared_len,
			object.parent_id(),
			object.children().len(),
			object.trailing.len()
		);
		if let Some(bytes) = object.opaque_bytes() {
			println!("\topaque: {}", hex_preview(bytes, 16));
		}
	}

	Ok(())
}

fn object_json(index: usize, object: &HircObject) -> ObjectJson {
	ObjectJson {
		index,
		id: object.id,
		kind: object.kind.as_str(),
		kind_tag: object.kind.as_u8(),
		offset: object.offset,
		len: object.declared_len,
		parent: object.parent_id(),
		children: object.children().to_vec(),
		output_bus: object.audio_properties().map(|props| props.output_bus_id),
		decoded: object.opaque_bytes().is_none(),
		trailing: object.trailing.len(),
	}
}

#[derive(serde::Serialize)]
struct ObjectsJson {
	path: String,
	count: usize,
	objects: Vec<ObjectJson>,
}

#[derive(serde::Serialize)]
struct ObjectJson {
	index: usize,
	id: u32,
	kind: &'static str,
	kind_tag: u8,
	offset: usize,
	len: u32,
	parent: u32,
	children: Vec<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	output_bus: Option<u32>,
	decoded: bool,
	trailing: usize,
}
