//! Static SVG export of a laid-out subgraph

use super::layout::LayoutSnapshot;
use crate::graph::VisibleSubgraph;
use std::fmt::Write;

const NODE_RADIUS: f64 = 6.0;
const HALO_RADIUS: f64 = 10.0;

/// Render `view` using the positions in `layout`.
///
/// Nodes without a position are left out, along with their links. The origin
/// of layout space maps to the middle of the canvas.
pub fn to_svg(view: &VisibleSubgraph, layout: &LayoutSnapshot) -> String {
    let ox = layout.width as f64 / 2.0;
    let oy = layout.height as f64 / 2.0;
    let mut svg = String::new();

    let _ = write!(
        svg,
        r##"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg" style="background-color: #f9fafb;">"##,
        layout.width, layout.height
    );

    for edge in &view.edges {
        let (Some(s), Some(t)) = (layout.positions.get(&edge.source), layout.positions.get(&edge.target)) else {
            continue;
        };
        let _ = write!(
            svg,
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="rgba(0,0,0,0.15)" stroke-width="2"><title>{}</title></line>"##,
            s.x + ox,
            s.y + oy,
            t.x + ox,
            t.y + oy,
            escape(&edge.label())
        );
    }

    for node in &view.nodes {
        let Some(p) = layout.positions.get(&node.id) else {
            continue;
        };
        let (cx, cy) = (p.x + ox, p.y + oy);
        let is_center = view.is_center(&node.id);

        if is_center {
            let _ = write!(
                svg,
                r##"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="rgba(0,123,255,0.25)"/>"##,
                cx, cy, HALO_RADIUS
            );
        }
        let fill = if is_center { "#0056b3" } else { "#007bff" };
        let _ = write!(
            svg,
            r##"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"##,
            cx, cy, NODE_RADIUS, fill
        );
        let _ = write!(
            svg,
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="Poppins, sans-serif" font-weight="600" font-size="14" fill="#343a40">{}</text>"##,
            cx,
            cy + 14.0 + NODE_RADIUS,
            escape(&node.name)
        );
    }

    svg.push_str("</svg>");
    svg
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
