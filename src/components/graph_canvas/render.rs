use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{GraphState, NODE_RADIUS};
use crate::theme::ThemeMode;

struct Scheme {
	background: &'static str,
	edge: &'static str,
	edge_dim: &'static str,
	label: &'static str,
	muted: &'static str,
	ring: &'static str,
}

fn scheme(mode: ThemeMode) -> Scheme {
	match mode {
		ThemeMode::Light => Scheme {
			background: "#f7f7f7",
			edge: "rgba(80, 90, 110, 0.35)",
			edge_dim: "rgba(80, 90, 110, 0.08)",
			label: "rgba(0, 0, 0, 0.75)",
			muted: "#ddd",
			ring: "rgba(0, 0, 0, 0.4)",
		},
		ThemeMode::Dark => Scheme {
			background: "#1a1a2e",
			edge: "rgba(100, 180, 255, 0.45)",
			edge_dim: "rgba(100, 180, 255, 0.08)",
			label: "rgba(255, 255, 255, 0.8)",
			muted: "#2f2f2f",
			ring: "rgba(255, 255, 255, 0.7)",
		},
	}
}

pub fn render(state: &GraphState, ctx: &CanvasRenderingContext2d, mode: ThemeMode) {
	let scheme = scheme(mode);
	ctx.set_fill_style_str(scheme.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx, &scheme);
	draw_nodes(state, ctx, &scheme);
}

fn draw_edges(state: &GraphState, ctx: &CanvasRenderingContext2d, scheme: &Scheme) {
	ctx.set_line_width(1.5);
	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		// An edge fades as soon as either endpoint is dimmed out.
		let dimmed = n1.data.user_data.dimmed() || n2.data.user_data.dimmed();
		ctx.set_stroke_style_str(if dimmed { scheme.edge_dim } else { scheme.edge });

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		ctx.stroke();
	});
}

fn draw_nodes(state: &GraphState, ctx: &CanvasRenderingContext2d, scheme: &Scheme) {
	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let dimmed = info.dimmed();
		let radius = if info.active {
			NODE_RADIUS * 1.3
		} else {
			NODE_RADIUS
		};

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if dimmed { scheme.muted } else { &info.color });
		ctx.fill();

		if info.active {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(scheme.ring);
			ctx.set_line_width(1.5);
			ctx.stroke();
		}

		if let Some(label) = &info.label {
			if !dimmed {
				ctx.set_fill_style_str(scheme.label);
				ctx.set_font("10px sans-serif");
				let _ = ctx.fill_text(label, x + radius + 3.0, y + 3.0);
			}
		}
	});
}
