use crate::bank::hierarchy::{Forest, HierarchyBuilder, HierarchyItem, NO_PARENT, NodeId};
use crate::bank::{BankError, HircObject, Result};

/// Short id of "Master Audio Bus".
pub const MASTER_AUDIO_BUS_ID: u32 = 3_803_692_087;
/// Short id of "Master Secondary Bus".
pub const MASTER_SECONDARY_BUS_ID: u32 = 805_203_703;

/// Bus forest with both well-known roots resolved.
#[derive(Debug, Clone)]
pub struct MasterBusHierarchy<T> {
	/// Linked buses.
	pub forest: Forest<T>,
	/// Node of `MASTER_AUDIO_BUS_ID`.
	pub primary: NodeId,
	/// Node of `MASTER_SECONDARY_BUS_ID`.
	pub secondary: NodeId,
}

/// One-shot linker for buses anchored on the two well-known master buses.
pub struct MasterBusHierarchyBuilder<T> {
	inner: HierarchyBuilder<T>,
}

impl<T: HierarchyItem> MasterBusHierarchyBuilder<T> {
	/// Group `buses` by declared parent bus.
	pub fn new(buses: impl IntoIterator<Item = T>) -> Self {
		Self {
			inner: HierarchyBuilder::new(buses),
		}
	}

	/// Link every bus and resolve both master roots.
	///
	/// Each well-known id must appear exactly once among buses without a
	/// parent, else `AmbiguousOrMissingRoot`.
	pub fn build(&mut self) -> Result<MasterBusHierarchy<T>> {
		let forest = self.inner.build()?;
		let primary = well_known_root(&forest, MASTER_AUDIO_BUS_ID)?;
		let secondary = well_known_root(&forest, MASTER_SECONDARY_BUS_ID)?;
		Ok(MasterBusHierarchy { forest, primary, secondary })
	}
}

fn well_known_root<T: HierarchyItem>(forest: &Forest<T>, id: u32) -> Result<NodeId> {
	let mut matches = forest.roots().iter().copied().filter(|root| {
		let item = &forest.node(*root).item;
		item.item_id() == id && item.parent_id() == NO_PARENT
	});

	match (matches.next(), matches.count()) {
		(Some(root), 0) => Ok(root),
		(first, rest) => Err(BankError::AmbiguousOrMissingRoot {
			id,
			found: usize::from(first.is_some()) + rest,
		}),
	}
}

/// Link every bus and aux bus object.
pub fn build_master_bus_hierarchy(objects: &[HircObject]) -> Result<MasterBusHierarchy<&HircObject>> {
	MasterBusHierarchyBuilder::new(objects.iter().filter(|object| object.as_bus().is_some())).build()
}
