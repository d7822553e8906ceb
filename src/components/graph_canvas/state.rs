use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::types::{GraphData, ItemState, SetItemState};

const CATEGORY_COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const NODE_RADIUS: f64 = 5.0;

/// Ordered `(category, color)` pairs for the distinct categories in `data`,
/// first appearance winning the position (and therefore the color).
pub fn category_colors(data: &GraphData) -> Vec<(String, String)> {
	let mut out: Vec<(String, String)> = Vec::new();
	for node in &data.nodes {
		let Some(category) = &node.category else {
			continue;
		};
		if out.iter().any(|(c, _)| c == category) {
			continue;
		}
		let color = CATEGORY_COLORS[out.len() % CATEGORY_COLORS.len()].to_string();
		out.push((category.clone(), color));
	}
	out
}

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: Option<String>,
	pub color: String,
	pub active: bool,
	pub inactive: bool,
}

impl NodeInfo {
	/// Inactive wins only when the node is not also marked active.
	pub fn dimmed(&self) -> bool {
		self.inactive && !self.active
	}
}

pub struct GraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	id_to_idx: HashMap<String, DefaultNodeIdx>,
}

fn simulation_parameters() -> SimulationParameters {
	SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	}
}

impl GraphState {
	/// An empty state; call [`GraphState::reset`] once the canvas is mounted
	/// and its dimensions are known.
	pub fn new() -> Self {
		Self {
			graph: ForceGraph::new(simulation_parameters()),
			width: 0.0,
			height: 0.0,
			animation_running: true,
			id_to_idx: HashMap::new(),
		}
	}

	/// Rebuild the simulation from `data`. All item states reset with it.
	pub fn reset(&mut self, data: &GraphData, width: f64, height: f64) {
		let mut graph = ForceGraph::new(simulation_parameters());
		let mut id_to_idx = HashMap::new();
		let palette: HashMap<String, String> = category_colors(data).into_iter().collect();

		for (i, node) in data.nodes.iter().enumerate() {
			let color = node
				.color
				.clone()
				.or_else(|| {
					node.category
						.as_ref()
						.and_then(|category| palette.get(category).cloned())
				})
				.unwrap_or_else(|| CATEGORY_COLORS[0].to_string());
			let angle = (i as f64) * 2.0 * PI / data.nodes.len().max(1) as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					color,
					active: false,
					inactive: false,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		self.graph = graph;
		self.id_to_idx = id_to_idx;
		self.width = width;
		self.height = height;
	}

	/// Current `(active, inactive)` flags for a node, `None` for unknown ids.
	pub fn item_state(&self, node_id: &str) -> Option<(bool, bool)> {
		let idx = *self.id_to_idx.get(node_id)?;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.data.user_data.active, node.data.user_data.inactive));
			}
		});
		found
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

impl Default for GraphState {
	fn default() -> Self {
		Self::new()
	}
}

impl SetItemState for GraphState {
	fn set_item_state(&mut self, node_id: &str, state: ItemState, enabled: bool) {
		let Some(&idx) = self.id_to_idx.get(node_id) else {
			debug!(
				"set_item_state: unknown node id {node_id:?} ({} -> {enabled})",
				state.as_str()
			);
			return;
		};
		self.graph.visit_nodes_mut(|node| {
			if node.index() != idx {
				return;
			}
			match state {
				ItemState::Active => node.data.user_data.active = enabled,
				ItemState::Inactive => node.data.user_data.inactive = enabled,
			}
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_canvas::types::{GraphLink, GraphNode};

	fn sample_data() -> GraphData {
		let node = |id: &str, category: &str| GraphNode {
			id: id.to_string(),
			label: None,
			category: Some(category.to_string()),
			color: None,
		};
		GraphData {
			nodes: vec![node("n1", "db"), node("n2", "api"), node("n3", "db")],
			links: vec![GraphLink {
				source: "n1".to_string(),
				target: "n2".to_string(),
			}],
		}
	}

	#[test]
	fn category_colors_dedupe_in_first_appearance_order() {
		let colors = category_colors(&sample_data());
		assert_eq!(colors.len(), 2);
		assert_eq!(colors[0].0, "db");
		assert_eq!(colors[1].0, "api");
		assert_ne!(colors[0].1, colors[1].1);
	}

	#[test]
	fn set_item_state_updates_only_the_named_node() {
		let mut state = GraphState::new();
		state.reset(&sample_data(), 800.0, 600.0);

		state.set_item_state("n1", ItemState::Active, true);
		state.set_item_state("n1", ItemState::Inactive, false);

		assert_eq!(state.item_state("n1"), Some((true, false)));
		assert_eq!(state.item_state("n2"), Some((false, false)));
		assert_eq!(state.item_state("n3"), Some((false, false)));
	}

	#[test]
	fn unknown_node_id_is_a_no_op() {
		let mut state = GraphState::new();
		state.reset(&sample_data(), 800.0, 600.0);

		state.set_item_state("missing", ItemState::Active, true);

		assert_eq!(state.item_state("missing"), None);
		assert_eq!(state.item_state("n1"), Some((false, false)));
	}

	#[test]
	fn reset_discards_previous_item_states() {
		let mut state = GraphState::new();
		state.reset(&sample_data(), 800.0, 600.0);
		state.set_item_state("n2", ItemState::Inactive, true);

		state.reset(&sample_data(), 800.0, 600.0);

		assert_eq!(state.item_state("n2"), Some((false, false)));
	}

	#[test]
	fn dimmed_requires_inactive_without_active() {
		let mut info = NodeInfo::default();
		assert!(!info.dimmed());
		info.inactive = true;
		assert!(info.dimmed());
		info.active = true;
		assert!(!info.dimmed());
	}
}
