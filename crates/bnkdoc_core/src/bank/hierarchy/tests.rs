use bnkdoc_testkit::{actor_mixer_body, bus_body, hirc_payload, hirc_record, kind, sound_body};

use crate::bank::{
	BankError, DecodeOptions, Forest, HierarchyBuilder, HierarchyItem, HircChunk, MASTER_AUDIO_BUS_ID, MASTER_SECONDARY_BUS_ID, MasterBusHierarchyBuilder,
	NO_PARENT, NodeId, build_actor_hierarchy, build_master_bus_hierarchy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Item {
	id: u32,
	parent: u32,
}

impl HierarchyItem for Item {
	fn item_id(&self) -> u32 {
		self.id
	}

	fn parent_id(&self) -> u32 {
		self.parent
	}
}

fn item(id: u32, parent: u32) -> Item {
	Item { id, parent }
}

fn build(items: &[Item]) -> Forest<Item> {
	HierarchyBuilder::new(items.iter().copied()).build().expect("forest builds")
}

fn ids(forest: &Forest<Item>, nodes: &[NodeId]) -> Vec<u32> {
	nodes.iter().map(|node| forest.node(*node).item.id).collect()
}

fn assert_complete_and_acyclic(forest: &Forest<Item>, input_len: usize) {
	let mut seen = vec![0_u32; forest.len()];
	for root in forest.roots() {
		assert!(forest.node(*root).parent.is_none());
		seen[root.0] += 1;
		for node in forest.descendants(*root) {
			seen[node.0] += 1;
		}
	}
	assert_eq!(forest.len(), input_len);
	assert!(seen.iter().all(|count| *count == 1), "every node reachable exactly once: {seen:?}");

	for (id, _) in forest.iter() {
		assert!(!forest.descendants(id).contains(&id), "node {} is its own descendant", id.0);
		assert!(!forest.ancestors(id).contains(&id), "node {} is its own ancestor", id.0);
	}
}

#[test]
fn links_children_in_first_seen_order() {
	let forest = build(&[item(3, 1), item(1, NO_PARENT), item(2, 1), item(4, 2), item(5, 1)]);

	assert_eq!(ids(&forest, forest.roots()), vec![1]);
	let root = forest.find(1).expect("root present");
	assert_eq!(ids(&forest, &forest.node(root).children), vec![3, 2, 5]);

	let leaf = forest.find(4).expect("leaf present");
	assert_eq!(forest.depth(leaf), 2);
	assert_eq!(ids(&forest, &forest.ancestors(leaf)), vec![2, 1]);
	assert_eq!(ids(&forest, &forest.descendants(root)), vec![3, 2, 4, 5]);

	let walk: Vec<(u32, usize)> = forest.walk().into_iter().map(|(node, depth)| (forest.node(node).item.id, depth)).collect();
	assert_eq!(walk, vec![(1, 0), (3, 1), (2, 1), (4, 2), (5, 1)]);
	assert_complete_and_acyclic(&forest, 5);
}

#[test]
fn dangling_parent_is_promoted_to_root() {
	let forest = build(&[item(1, NO_PARENT), item(2, 99), item(3, 2)]);

	assert_eq!(ids(&forest, forest.roots()), vec![1, 2]);
	assert_eq!(ids(&forest, forest.orphans()), vec![2]);
	assert!(forest.promoted().is_empty());
	let orphan = forest.find(2).expect("orphan present");
	assert_eq!(ids(&forest, &forest.node(orphan).children), vec![3]);
}

#[test]
fn parent_cycles_are_broken_in_input_order() {
	let forest = build(&[item(1, 2), item(2, 1), item(3, 3), item(4, 1)]);

	assert_eq!(ids(&forest, forest.promoted()), vec![1, 3]);
	assert_eq!(ids(&forest, forest.roots()), vec![1, 3]);
	let first = forest.find(1).expect("cycle member present");
	assert_eq!(ids(&forest, &forest.node(first).children), vec![2, 4]);
	assert!(forest.node(forest.find(3).expect("self parent present")).children.is_empty());
	assert_complete_and_acyclic(&forest, 4);
}

#[test]
fn arbitrary_parent_sets_stay_complete_and_acyclic() {
	let mut state = 0x2545_f491_u32;
	let mut next = move || {
		state ^= state << 13;
		state ^= state >> 17;
		state ^= state << 5;
		state
	};

	for round in 0..200 {
		let len = (round % 23) + 1;
		let items: Vec<Item> = (0..len)
			.map(|_| {
				let id = next() % 16;
				let parent = match next() % 4 {
					0 => NO_PARENT,
					1 => 100 + next() % 4,
					_ => next() % 16,
				};
				item(id, parent)
			})
			.collect();

		let forest = build(&items);
		assert_complete_and_acyclic(&forest, items.len());
	}
}

#[test]
fn second_build_is_rejected() {
	let mut builder = HierarchyBuilder::new([item(1, NO_PARENT)]);
	assert!(!builder.is_built());
	builder.build().expect("first build");
	assert!(builder.is_built());
	assert!(matches!(builder.build(), Err(BankError::AlreadyBuilt)));
}

#[test]
fn empty_input_builds_empty_forest() {
	let forest = build(&[]);
	assert!(forest.is_empty());
	assert!(forest.roots().is_empty());
}

#[test]
fn master_roots_resolve_in_any_order() {
	let layouts = [
		vec![item(MASTER_AUDIO_BUS_ID, NO_PARENT), item(MASTER_SECONDARY_BUS_ID, NO_PARENT), item(7, MASTER_AUDIO_BUS_ID)],
		vec![item(7, MASTER_AUDIO_BUS_ID), item(MASTER_SECONDARY_BUS_ID, NO_PARENT), item(8, 7), item(MASTER_AUDIO_BUS_ID, NO_PARENT)],
	];

	for buses in layouts {
		let hierarchy = MasterBusHierarchyBuilder::new(buses.iter().copied()).build().expect("master roots resolve");
		assert_eq!(hierarchy.forest.node(hierarchy.primary).item.id, MASTER_AUDIO_BUS_ID);
		assert_eq!(hierarchy.forest.node(hierarchy.secondary).item.id, MASTER_SECONDARY_BUS_ID);
		assert_eq!(ids(&hierarchy.forest, &hierarchy.forest.node(hierarchy.primary).children), vec![7]);
	}
}

#[test]
fn missing_or_duplicate_master_root_fails() {
	let missing = [item(MASTER_AUDIO_BUS_ID, NO_PARENT), item(5, MASTER_AUDIO_BUS_ID)];
	let err = MasterBusHierarchyBuilder::new(missing).build().expect_err("secondary missing");
	assert!(matches!(
		err,
		BankError::AmbiguousOrMissingRoot {
			id: MASTER_SECONDARY_BUS_ID,
			found: 0
		}
	));

	let duplicate = [
		item(MASTER_AUDIO_BUS_ID, NO_PARENT),
		item(MASTER_SECONDARY_BUS_ID, NO_PARENT),
		item(MASTER_AUDIO_BUS_ID, NO_PARENT),
	];
	let err = MasterBusHierarchyBuilder::new(duplicate).build().expect_err("primary duplicated");
	assert!(matches!(
		err,
		BankError::AmbiguousOrMissingRoot {
			id: MASTER_AUDIO_BUS_ID,
			found: 2
		}
	));

	// A parented bus carrying a well-known id does not count as the root.
	let parented = [item(MASTER_AUDIO_BUS_ID, 9), item(9, NO_PARENT), item(MASTER_SECONDARY_BUS_ID, NO_PARENT)];
	let err = MasterBusHierarchyBuilder::new(parented).build().expect_err("primary not a root");
	assert!(matches!(err, BankError::AmbiguousOrMissingRoot { id: MASTER_AUDIO_BUS_ID, .. }));
}

#[test]
fn decoded_objects_link_by_kind() {
	let payload = hirc_payload(&[
		hirc_record(kind::BUS, MASTER_AUDIO_BUS_ID, &bus_body(NO_PARENT)),
		hirc_record(kind::ACTOR_MIXER, 10, &actor_mixer_body(NO_PARENT, &[11])),
		hirc_record(kind::SOUND, 11, &sound_body(10, 1)),
		hirc_record(kind::AUX_BUS, 30, &bus_body(MASTER_AUDIO_BUS_ID)),
		hirc_record(kind::EVENT, 40, &[0, 0, 0, 0]),
		hirc_record(kind::BUS, MASTER_SECONDARY_BUS_ID, &bus_body(NO_PARENT)),
	]);
	let chunk = HircChunk::parse(&payload, &DecodeOptions::default()).expect("hirc decodes");

	let actors = build_actor_hierarchy(&chunk.objects).expect("actor forest builds");
	assert_eq!(actors.len(), 2);
	let mixer = actors.find(10).expect("mixer linked");
	assert_eq!(actors.roots(), &[mixer]);
	assert_eq!(actors.descendants(mixer).len(), 1);
	assert!(actors.find(40).is_none());

	let buses = build_master_bus_hierarchy(&chunk.objects).expect("bus forest builds");
	assert_eq!(buses.forest.len(), 3);
	let aux = buses.forest.find(30).expect("aux bus linked");
	assert_eq!(buses.forest.node(aux).parent, Some(buses.primary));
	assert!(buses.forest.node(buses.secondary).children.is_empty());
}

#[test]
fn actor_hierarchy_keeps_only_objects_with_audio_properties() {
	let payload = hirc_payload(&[
		hirc_record(kind::EVENT, 1, &[0, 0, 0, 0]),
		hirc_record(kind::BUS, 2, &bus_body(NO_PARENT)),
		hirc_record(kind::SOUND, 3, &sound_body(2, 1)),
		hirc_record(kind::ACTOR_MIXER, 4, &actor_mixer_body(NO_PARENT, &[5])),
		hirc_record(kind::SOUND, 5, &sound_body(4, 2)),
		hirc_record(0x7f, 6, &[1, 2]),
	]);
	let chunk = HircChunk::parse(&payload, &DecodeOptions::default()).expect("hirc decodes");
	let forest = build_actor_hierarchy(&chunk.objects).expect("actor forest builds");

	let mut ids: Vec<u32> = forest.iter().map(|(_, node)| node.item.id).collect();
	ids.sort_unstable();
	assert_eq!(ids, vec![3, 4, 5]);

	// parented to a bus, which is not part of the actor tree
	let orphan = forest.find(3).expect("sound linked");
	assert_eq!(forest.orphans(), &[orphan]);
	assert_eq!(forest.roots(), &[orphan, forest.find(4).expect("mixer linked")]);
}
