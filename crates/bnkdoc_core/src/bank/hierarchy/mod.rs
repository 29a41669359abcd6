use std::collections::{HashMap, HashSet};

use crate::bank::{BankError, HircObject, Result};

mod master_bus;

pub use master_bus::{MASTER_AUDIO_BUS_ID, MASTER_SECONDARY_BUS_ID, MasterBusHierarchy, MasterBusHierarchyBuilder, build_master_bus_hierarchy};

/// Parent id meaning "no parent".
pub const NO_PARENT: u32 = 0;

/// Anything that can be linked into a forest by id.
pub trait HierarchyItem {
	/// Own id.
	fn item_id(&self) -> u32;
	/// Declared parent id, `NO_PARENT` for none.
	fn parent_id(&self) -> u32;
}

impl<T: HierarchyItem + ?Sized> HierarchyItem for &T {
	fn item_id(&self) -> u32 {
		(**self).item_id()
	}

	fn parent_id(&self) -> u32 {
		(**self).parent_id()
	}
}

impl HierarchyItem for HircObject {
	fn item_id(&self) -> u32 {
		self.id
	}

	fn parent_id(&self) -> u32 {
		HircObject::parent_id(self)
	}
}

/// Index of a node inside its forest's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One linked item.
#[derive(Debug, Clone)]
pub struct HierarchyNode<T> {
	/// Wrapped item.
	pub item: T,
	/// Parent node, `None` for roots.
	pub parent: Option<NodeId>,
	/// Child nodes in first-seen input order.
	pub children: Vec<NodeId>,
}

/// Arena of linked nodes. Node ids follow input order.
#[derive(Debug, Clone)]
pub struct Forest<T> {
	nodes: Vec<HierarchyNode<T>>,
	roots: Vec<NodeId>,
	orphans: Vec<NodeId>,
	promoted: Vec<NodeId>,
	by_id: HashMap<u32, NodeId>,
}

impl<T> Forest<T> {
	/// Top-level nodes: sentinel parents and orphans in input order, then cycle members promoted to roots.
	pub fn roots(&self) -> &[NodeId] {
		&self.roots
	}

	/// Roots whose declared parent id was not among the input ids.
	pub fn orphans(&self) -> &[NodeId] {
		&self.orphans
	}

	/// Roots created to break parent cycles.
	pub fn promoted(&self) -> &[NodeId] {
		&self.promoted
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the forest holds no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Node by arena index.
	///
	/// Panics if `id` did not come from this forest.
	pub fn node(&self, id: NodeId) -> &HierarchyNode<T> {
		&self.nodes[id.0]
	}

	/// Node by arena index, `None` when out of range.
	pub fn get(&self, id: NodeId) -> Option<&HierarchyNode<T>> {
		self.nodes.get(id.0)
	}

	/// Iterate nodes in arena order.
	pub fn iter(&self) -> impl Iterator<Item = (NodeId, &HierarchyNode<T>)> + '_ {
		self.nodes.iter().enumerate().map(|(index, node)| (NodeId(index), node))
	}

	/// First node carrying `item_id`.
	pub fn find(&self, item_id: u32) -> Option<NodeId> {
		self.by_id.get(&item_id).copied()
	}

	/// Every node below `id`, depth-first pre-order.
	pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
		let mut out = Vec::new();
		let mut stack: Vec<NodeId> = self.node(id).children.iter().rev().copied().collect();
		while let Some(next) = stack.pop() {
			out.push(next);
			stack.extend(self.node(next).children.iter().rev().copied());
		}
		out
	}

	/// Parent chain of `id`, nearest first.
	pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
		let mut out = Vec::new();
		let mut current = self.node(id).parent;
		while let Some(parent) = current {
			out.push(parent);
			current = self.node(parent).parent;
		}
		out
	}

	/// Distance from `id` to its root.
	pub fn depth(&self, id: NodeId) -> usize {
		self.ancestors(id).len()
	}

	/// Every node with its depth, root by root in pre-order.
	pub fn walk(&self) -> Vec<(NodeId, usize)> {
		let mut out = Vec::with_capacity(self.nodes.len());
		for root in &self.roots {
			let mut stack = vec![(*root, 0_usize)];
			while let Some((id, depth)) = stack.pop() {
				out.push((id, depth));
				stack.extend(self.node(id).children.iter().rev().map(|child| (*child, depth + 1)));
			}
		}
		out
	}
}

struct Pending<T> {
	items: Vec<T>,
	children_of: HashMap<u32, Vec<usize>>,
}

/// One-shot linker from items to a [`Forest`].
///
/// The parent to children grouping is computed up front and consumed by
/// [`HierarchyBuilder::build`]; a second call fails with `AlreadyBuilt`.
pub struct HierarchyBuilder<T> {
	pending: Option<Pending<T>>,
}

impl<T: HierarchyItem> HierarchyBuilder<T> {
	/// Group `items` by declared parent, keeping first-seen order.
	pub fn new(items: impl IntoIterator<Item = T>) -> Self {
		let items: Vec<T> = items.into_iter().collect();
		let mut children_of: HashMap<u32, Vec<usize>> = HashMap::new();
		for (index, item) in items.iter().enumerate() {
			let parent = item.parent_id();
			if parent != NO_PARENT {
				children_of.entry(parent).or_default().push(index);
			}
		}

		Self {
			pending: Some(Pending { items, children_of }),
		}
	}

	/// Whether `build` already ran.
	pub fn is_built(&self) -> bool {
		self.pending.is_none()
	}

	/// Link every item exactly once.
	///
	/// Items whose parent is `NO_PARENT` or names no input item become roots.
	/// Items still unattached afterwards sit on a parent cycle; they are
	/// promoted to roots in input order, which keeps the result acyclic.
	pub fn build(&mut self) -> Result<Forest<T>> {
		let Pending { items, mut children_of } = self.pending.take().ok_or(BankError::AlreadyBuilt)?;

		let ids: HashSet<u32> = items.iter().map(|item| item.item_id()).collect();
		let mut by_id = HashMap::with_capacity(items.len());
		for (index, item) in items.iter().enumerate() {
			by_id.entry(item.item_id()).or_insert(NodeId(index));
		}

		let mut roots = Vec::new();
		let mut orphans = Vec::new();
		for (index, item) in items.iter().enumerate() {
			let parent = item.parent_id();
			if parent == NO_PARENT {
				roots.push(NodeId(index));
			} else if !ids.contains(&parent) {
				roots.push(NodeId(index));
				orphans.push(NodeId(index));
			}
		}

		let mut nodes: Vec<HierarchyNode<T>> = items
			.into_iter()
			.map(|item| HierarchyNode {
				item,
				parent: None,
				children: Vec::new(),
			})
			.collect();
		let mut attached = vec![false; nodes.len()];

		for root in &roots {
			attached[root.0] = true;
		}
		for root in roots.clone() {
			attach_subtree(&mut nodes, &mut attached, &mut children_of, root);
		}

		let mut promoted = Vec::new();
		for index in 0..nodes.len() {
			if attached[index] {
				continue;
			}
			attached[index] = true;
			roots.push(NodeId(index));
			promoted.push(NodeId(index));
			attach_subtree(&mut nodes, &mut attached, &mut children_of, NodeId(index));
		}

		Ok(Forest {
			nodes,
			roots,
			orphans,
			promoted,
			by_id,
		})
	}
}

fn attach_subtree<T: HierarchyItem>(nodes: &mut [HierarchyNode<T>], attached: &mut [bool], children_of: &mut HashMap<u32, Vec<usize>>, root: NodeId) {
	let mut stack = vec![root];
	while let Some(parent) = stack.pop() {
		let Some(children) = children_of.remove(&nodes[parent.0].item.item_id()) else {
			continue;
		};
		for child in children {
			if attached[child] {
				continue;
			}
			attached[child] = true;
			nodes[child].parent = Some(parent);
			nodes[parent.0].children.push(NodeId(child));
			stack.push(NodeId(child));
		}
	}
}

/// Link every object that carries an audio properties block.
///
/// Only sounds, containers and actor-mixers take part. Events, actions,
/// states, buses, attenuations and opaque records are left out of the
/// forest, and an actor whose parent is one of them becomes an orphan root.
/// Use [`HierarchyBuilder`] directly to link an arbitrary object set.
pub fn build_actor_hierarchy(objects: &[HircObject]) -> Result<Forest<&HircObject>> {
	HierarchyBuilder::new(objects.iter().filter(|object| object.audio_properties().is_some())).build()
}

#[cfg(test)]
mod tests;
