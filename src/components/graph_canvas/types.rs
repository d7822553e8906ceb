/// The two node-level visual states the legend drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemState {
	Active,
	Inactive,
}

impl ItemState {
	pub fn as_str(self) -> &'static str {
		match self {
			ItemState::Active => "active",
			ItemState::Inactive => "inactive",
		}
	}
}

/// Node-state seam between the legend and the graph canvas. Unknown node
/// ids are a no-op, not an error.
pub trait SetItemState {
	fn set_item_state(&mut self, node_id: &str, state: ItemState, enabled: bool);
}

#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: String,
	pub label: Option<String>,
	pub category: Option<String>,
	pub color: Option<String>,
}

#[derive(Clone, Debug)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
