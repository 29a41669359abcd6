use std::path::PathBuf;

use bnkdoc::bank::{BankError, ChunkTag, Result, build_master_bus_hierarchy};

use crate::cmd::util::{TreeNodeJson, emit_json, node_ids, open_bank, print_forest, tree_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub strict: bool,
	#[arg(long)]
	pub json: bool,
}

/// Print the bus hierarchy anchored on the two master buses.
pub fn run(args: Args) -> Result<()> {
	let Args { path, strict, json } = args;

	let mut bank = open_bank(&path, strict)?;
	let hirc = bank.hierarchy()?.ok_or(BankError::ChunkNotFound { tag: ChunkTag::HIRC })?;
	let hierarchy = build_master_bus_hierarchy(&hirc.objects)?;
	let forest = &hierarchy.forest;

	if json {
		let payload = BusesJson {
			path: path.display().to_string(),
			primary: forest.node(hierarchy.primary).item.id,
			secondary: forest.node(hierarchy.secondary).item.id,
			buses: forest.len(),
			roots: forest.roots().iter().map(|root| tree_json(forest, *root)).collect(),
			orphans: node_ids(forest, forest.orphans()),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("primary: {}", forest.node(hierarchy.primary).item.id);
	println!("secondary: {}", forest.node(hierarchy.secondary).item.id);
	println!("buses: {}", forest.len());
	for id in node_ids(forest, forest.orphans()) {
		println!("orphan: {id}");
	}
	print_forest(forest);

	Ok(())
}

#[derive(serde::Serialize)]
struct BusesJson {
	path: String,
	primary: u32,
	secondary: u32,
	buses: usize,
	roots: Vec<TreeNodeJson>,
	orphans: Vec<u32>,
}
