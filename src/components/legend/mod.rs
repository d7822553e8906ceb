mod component;
mod options;
mod palette;

pub use component::LegendNode;
pub use options::{
	LegendDataMap, LegendOption, apply_item_states, data_map_from_graph, options_from_graph,
	toggle_option,
};
pub use palette::{dot_color, label_color};
