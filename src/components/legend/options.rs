use std::collections::HashMap;

use log::debug;

use crate::components::graph_canvas::{GraphData, ItemState, SetItemState, category_colors};

/// One labeled, colored, toggleable category shown in the legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendOption {
	pub label: String,
	pub color: String,
	/// Stable identity key; exactly one option per distinct value.
	pub value: String,
	pub checked: bool,
}

/// Lookup from a legend value to the graph-node ids in that category.
pub type LegendDataMap = HashMap<String, Vec<String>>;

/// Invert the checked flag of the option with the given `value`, leaving
/// every other entry untouched and the order as it was. Returns the updated
/// entry together with the full updated list, or `None` when no entry
/// carries that value.
pub fn toggle_option(
	options: &[LegendOption],
	value: &str,
) -> Option<(LegendOption, Vec<LegendOption>)> {
	let current = options.iter().find(|option| option.value == value)?;
	let updated = LegendOption {
		checked: !current.checked,
		..current.clone()
	};
	let next = options
		.iter()
		.map(|option| {
			if option.value == value {
				updated.clone()
			} else {
				option.clone()
			}
		})
		.collect();
	Some((updated, next))
}

/// Push the toggled option's checked flag down to the graph: every node in
/// its category becomes `active = checked`, `inactive = !checked`. A value
/// with no data-map entry highlights nothing.
pub fn apply_item_states(
	graph: &mut dyn SetItemState,
	data_map: &LegendDataMap,
	option: &LegendOption,
) {
	let Some(node_ids) = data_map.get(&option.value) else {
		debug!("legend value {:?} has no mapped nodes", option.value);
		return;
	};
	for id in node_ids {
		graph.set_item_state(id, ItemState::Active, option.checked);
		graph.set_item_state(id, ItemState::Inactive, !option.checked);
	}
}

/// One legend option per distinct node category, in first-appearance order,
/// colored like the canvas draws that category. Everything starts checked.
pub fn options_from_graph(data: &GraphData) -> Vec<LegendOption> {
	category_colors(data)
		.into_iter()
		.map(|(category, color)| LegendOption {
			label: category.clone(),
			color,
			value: category,
			checked: true,
		})
		.collect()
}

/// Group node ids by category, preserving node order within each entry.
pub fn data_map_from_graph(data: &GraphData) -> LegendDataMap {
	let mut map = LegendDataMap::new();
	for node in &data.nodes {
		let Some(category) = &node.category else {
			continue;
		};
		map.entry(category.clone())
			.or_default()
			.push(node.id.clone());
	}
	map
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_canvas::{GraphLink, GraphNode};

	#[derive(Default)]
	struct RecordingGraph {
		calls: Vec<(String, ItemState, bool)>,
	}

	impl SetItemState for RecordingGraph {
		fn set_item_state(&mut self, node_id: &str, state: ItemState, enabled: bool) {
			self.calls.push((node_id.to_string(), state, enabled));
		}
	}

	fn option(label: &str, value: &str, color: &str, checked: bool) -> LegendOption {
		LegendOption {
			label: label.to_string(),
			color: color.to_string(),
			value: value.to_string(),
			checked,
		}
	}

	#[test]
	fn toggle_flips_only_the_target_and_preserves_order() {
		let options = vec![
			option("A", "a", "#f00", false),
			option("B", "b", "#0f0", true),
			option("C", "c", "#00f", false),
		];

		let (updated, next) = toggle_option(&options, "b").unwrap();

		assert_eq!(updated.value, "b");
		assert!(!updated.checked);
		assert_eq!(next.len(), 3);
		assert_eq!(next[0], options[0]);
		assert_eq!(next[1], updated);
		assert_eq!(next[2], options[2]);
	}

	#[test]
	fn toggle_unknown_value_returns_none() {
		let options = vec![option("A", "a", "#f00", false)];
		assert!(toggle_option(&options, "missing").is_none());
	}

	#[test]
	fn toggling_twice_restores_the_starting_list() {
		let options = vec![
			option("A", "a", "#f00", false),
			option("B", "b", "#0f0", true),
		];
		let (_, once) = toggle_option(&options, "a").unwrap();
		let (_, twice) = toggle_option(&once, "a").unwrap();
		assert_eq!(twice, options);
	}

	#[test]
	fn apply_sets_both_states_for_every_mapped_node() {
		let mut graph = RecordingGraph::default();
		let data_map = LegendDataMap::from([
			("a".to_string(), vec!["n1".to_string(), "n2".to_string()]),
			("b".to_string(), vec!["n3".to_string()]),
		]);

		apply_item_states(&mut graph, &data_map, &option("A", "a", "#f00", true));

		assert_eq!(
			graph.calls,
			vec![
				("n1".to_string(), ItemState::Active, true),
				("n1".to_string(), ItemState::Inactive, false),
				("n2".to_string(), ItemState::Active, true),
				("n2".to_string(), ItemState::Inactive, false),
			]
		);
	}

	#[test]
	fn apply_with_unmapped_value_touches_nothing() {
		let mut graph = RecordingGraph::default();
		let data_map = LegendDataMap::from([("b".to_string(), vec!["n3".to_string()])]);

		apply_item_states(&mut graph, &data_map, &option("A", "a", "#f00", true));

		assert!(graph.calls.is_empty());
	}

	#[test]
	fn click_scenario_from_the_interaction_contract() {
		// options = [A unchecked, B checked], dataMap = {a: [n1], b: [n2]};
		// clicking A checks it, highlights n1, and leaves n2 alone.
		let options = vec![
			option("A", "a", "#f00", false),
			option("B", "b", "#0f0", true),
		];
		let data_map = LegendDataMap::from([
			("a".to_string(), vec!["n1".to_string()]),
			("b".to_string(), vec!["n2".to_string()]),
		]);

		let (updated, next) = toggle_option(&options, "a").unwrap();
		let mut graph = RecordingGraph::default();
		apply_item_states(&mut graph, &data_map, &updated);

		assert_eq!(updated, option("A", "a", "#f00", true));
		assert_eq!(
			next,
			vec![option("A", "a", "#f00", true), option("B", "b", "#0f0", true)]
		);
		assert_eq!(
			graph.calls,
			vec![
				("n1".to_string(), ItemState::Active, true),
				("n1".to_string(), ItemState::Inactive, false),
			]
		);
	}

	#[test]
	fn options_and_data_map_derive_from_node_categories() {
		let node = |id: &str, category: Option<&str>| GraphNode {
			id: id.to_string(),
			label: None,
			category: category.map(str::to_string),
			color: None,
		};
		let data = GraphData {
			nodes: vec![
				node("n1", Some("db")),
				node("n2", Some("api")),
				node("n3", Some("db")),
				node("n4", None),
			],
			links: vec![GraphLink {
				source: "n1".to_string(),
				target: "n2".to_string(),
			}],
		};

		let options = options_from_graph(&data);
		assert_eq!(options.len(), 2);
		assert_eq!(options[0].value, "db");
		assert_eq!(options[1].value, "api");
		assert!(options.iter().all(|o| o.checked));

		let map = data_map_from_graph(&data);
		assert_eq!(map.len(), 2);
		assert_eq!(map["db"], vec!["n1".to_string(), "n3".to_string()]);
		assert_eq!(map["api"], vec!["n2".to_string()]);
	}
}
