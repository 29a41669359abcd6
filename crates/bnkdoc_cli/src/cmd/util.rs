use std::path::Path;

use bnkdoc::bank::{BankError, DecodeOptions, Forest, HircObject, NodeId, Result, SoundBank};

/// Open a bank with lenient or strict record layout checks.
pub(crate) fn open_bank(path: &Path, strict: bool) -> Result<SoundBank> {
	let options = if strict { DecodeOptions::strict() } else { DecodeOptions::default() };
	Ok(SoundBank::open(path)?.with_options(options))
}

/// Parse decimal or `0x`-prefixed hex object id.
pub(crate) fn parse_object_id(value: &str) -> Result<u32> {
	let parsed = if let Some(stripped) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		u32::from_str_radix(stripped, 16)
	} else {
		value.parse::<u32>()
	};

	parsed.map_err(|_| BankError::InvalidObjectId { value: value.to_owned() })
}

/// Pretty-print a serializable payload to stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
	println!("{text}");
	Ok(())
}

/// Space-separated hex bytes, truncated to `limit` with a trailing marker.
pub(crate) fn hex_preview(bytes: &[u8], limit: usize) -> String {
	let mut out = bytes.iter().take(limit).map(|byte| format!("{byte:02x}")).collect::<Vec<_>>().join(" ");
	if bytes.len() > limit {
		out.push_str(" ..");
	}
	out
}

/// Nested JSON view of one linked object and its subtree.
#[derive(serde::Serialize)]
pub(crate) struct TreeNodeJson {
	pub id: u32,
	pub kind: &'static str,
	pub children: Vec<TreeNodeJson>,
}

pub(crate) fn tree_json(forest: &Forest<&HircObject>, id: NodeId) -> TreeNodeJson {
	let node = forest.node(id);
	TreeNodeJson {
		id: node.item.id,
		kind: node.item.kind.as_str(),
		children: node.children.iter().map(|child| tree_json(forest, *child)).collect(),
	}
}

/// Print a forest indented two spaces per level, one object per line.
pub(crate) fn print_forest(forest: &Forest<&HircObject>) {
	for (id, depth) in forest.walk() {
		let object = forest.node(id).item;
		println!("{}{} {}", "  ".repeat(depth), object.id, object.kind.as_str());
	}
}

/// Ids of the objects behind `nodes`.
pub(crate) fn node_ids(forest: &Forest<&HircObject>, nodes: &[NodeId]) -> Vec<u32> {
	nodes.iter().map(|node| forest.node(*node).item.id).collect()
}
