use std::path::PathBuf;

use bnkdoc::bank::{BankError, ChunkTag, Result, build_actor_hierarchy};

use crate::cmd::util::{TreeNodeJson, emit_json, node_ids, open_bank, print_forest, tree_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub strict: bool,
	#[arg(long)]
	pub json: bool,
}

/// Print the actor-mixer hierarchy, one object per line.
pub fn run(args: Args) -> Result<()> {
	let Args { path, strict, json } = args;

	let mut bank = open_bank(&path, strict)?;
	let hirc = bank.hierarchy()?.ok_or(BankError::ChunkNotFound { tag: ChunkTag::HIRC })?;
	let forest = build_actor_hierarchy(&hirc.objects)?;

	if json {
		let payload = TreeJson {
			path: path.display().to_string(),
			nodes: forest.len(),
			roots: forest.roots().iter().map(|root| tree_json(&forest, *root)).collect(),
			orphans: node_ids(&forest, forest.orphans()),
			promoted: node_ids(&forest, forest.promoted()),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("nodes: {}", forest.len());
	println!("roots: {}", forest.roots().len());
	for id in node_ids(&forest, forest.orphans()) {
		println!("orphan: {id}");
	}
	for id in node_ids(&forest, forest.promoted()) {
		println!("cycle_root: {id}");
	}
	print_forest(&forest);

	Ok(())
}

#[derive(serde::Serialize)]
struct TreeJson {
	path: String,
	nodes: usize,
	roots: Vec<TreeNodeJson>,
	orphans: Vec<u32>,
	promoted: Vec<u32>,
}
