mod component;
mod render;
mod state;
mod types;

pub use component::GraphCanvas;
pub use state::{GraphState, category_colors};
pub use types::{GraphData, GraphLink, GraphNode, ItemState, SetItemState};
