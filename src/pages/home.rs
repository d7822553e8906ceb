use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::info;

use crate::components::graph_canvas::{
	GraphCanvas, GraphData, GraphLink, GraphNode, GraphState, SetItemState,
};
use crate::components::legend::{LegendNode, LegendOption, data_map_from_graph, options_from_graph};
use crate::theme::ThemeMode;

const CATEGORIES: &[&str] = &["Gateway", "Service", "Database", "Cache", "Queue"];

/// Generate a sample service graph: a random tree with one category per node.
fn generate_sample_data(n: usize) -> GraphData {
	let nodes: Vec<GraphNode> = (0..n)
		.map(|i| GraphNode {
			id: i.to_string(),
			label: if i < 10 {
				Some(format!("Node {}", i))
			} else {
				None
			},
			category: Some(CATEGORIES[i % CATEGORIES.len()].to_string()),
			color: None,
		})
		.collect();

	let links: Vec<GraphLink> = (1..n)
		.map(|i| {
			let target = (rand_simple(i) * (i as f64)) as usize;
			GraphLink {
				source: i.to_string(),
				target: target.to_string(),
			}
		})
		.collect();

	GraphData { nodes, links }
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(move || generate_sample_data(100));
	let options = Signal::derive(move || options_from_graph(&graph_data.get()));
	let data_map = Signal::derive(move || data_map_from_graph(&graph_data.get()));
	let theme = RwSignal::new(ThemeMode::Dark);

	let graph = Rc::new(RefCell::new(GraphState::new()));
	let legend_graph: Rc<RefCell<dyn SetItemState>> = graph.clone();

	let on_change = Callback::new(|(option, all): (LegendOption, Vec<LegendOption>)| {
		info!(
			"legend toggled {:?} -> checked={} ({} options)",
			option.value,
			option.checked,
			all.len()
		);
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class=move || format!("fullscreen-graph theme-{}", theme.get().as_str())>
				<GraphCanvas data=graph_data graph=graph.clone() theme=theme fullscreen=true />
				<div class="graph-overlay">
					<h1>"Service Graph"</h1>
					<p class="subtitle">
						"Click a legend entry to toggle highlighting for its category."
					</p>
					<button on:click=move |_| theme.update(|mode| *mode = mode.toggled())>
						{move || match theme.get() {
							ThemeMode::Light => "Switch to dark",
							ThemeMode::Dark => "Switch to light",
						}}
					</button>
				</div>
				<LegendNode
					options=options
					data_map=data_map
					graph=legend_graph
					theme=theme
					on_change=on_change
				/>
			</div>
		</ErrorBoundary>
	}
}
