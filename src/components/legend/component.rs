use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::options::{LegendDataMap, LegendOption, apply_item_states, toggle_option};
use super::palette;
use crate::components::graph_canvas::SetItemState;
use crate::theme::ThemeMode;

#[component]
pub fn LegendNode(
	/// Default option list; replacing it discards local toggles.
	#[prop(into)]
	options: Signal<Vec<LegendOption>>,
	#[prop(into)] data_map: Signal<LegendDataMap>,
	/// The graph whose node states a toggle drives.
	graph: Rc<RefCell<dyn SetItemState>>,
	#[prop(into)] theme: Signal<ThemeMode>,
	/// Pass-through container styling.
	#[prop(optional, into)]
	style: Option<String>,
	/// Invoked after every toggle with the updated option and the full list.
	#[prop(optional, into)]
	on_change: Option<Callback<(LegendOption, Vec<LegendOption>)>>,
) -> impl IntoView {
	let local = RwSignal::new(options.get_untracked());

	// One-way resync: a new upstream default replaces local state wholesale.
	Effect::new(move |_| {
		local.set(options.get());
	});

	let handle_click = {
		let graph = graph.clone();
		move |value: &str| {
			let current = local.get_untracked();
			let Some((updated, next)) = toggle_option(&current, value) else {
				return;
			};
			local.set(next.clone());
			data_map.with_untracked(|map| {
				apply_item_states(&mut *graph.borrow_mut(), map, &updated);
			});
			if let Some(cb) = on_change {
				cb.run((updated, next));
			}
		}
	};

	view! {
		<ul class="graph-legend" style=style>
			{move || {
				local
					.get()
					.into_iter()
					.map(|option| {
						let handle_click = handle_click.clone();
						let value = option.value.clone();
						let dot = palette::dot_color(theme.get(), option.checked, &option.color)
							.to_string();
						let label = palette::label_color(theme.get(), option.checked);
						view! {
							<li class="item" on:click=move |_| handle_click(&value)>
								<span class="dot" style:background=dot></span>
								<span class="label" style:color=label>{option.label.clone()}</span>
							</li>
						}
					})
					.collect_view()
			}}
		</ul>
	}
}
