//! Circular layout for the tag graph.
//!
//! Nodes sit evenly spaced on the unit circle in graph iteration order;
//! edges carry their endpoints' coordinates so a renderer can draw them
//! without another lookup.

use std::collections::HashMap;
use std::f64::consts::TAU;

use serde::Serialize;

use crate::graph::TagGraph;
use crate::model::TagId;

/// Smallest marker size, so single-question tags stay visible
pub const MIN_MARKER_SIZE: usize = 20;
/// Marker growth per question bearing the tag
pub const MARKER_SCALE: usize = 5;
/// Thinnest edge line
pub const MIN_EDGE_WIDTH: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Positioned tag node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagNode {
    pub id: TagId,
    pub name: String,
    /// Distinct questions bearing this tag
    pub size: usize,
    pub x: f64,
    pub y: f64,
    pub marker_size: usize,
    pub color: String,
}

/// Renderable co-occurrence edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagEdge {
    pub source: TagId,
    pub target: TagId,
    pub value: u32,
    pub width: u32,
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagLayout {
    pub nodes: Vec<TagNode>,
    pub edges: Vec<TagEdge>,
}

/// Position of node `index` out of `count` on the unit circle.
///
/// `count == 0` has no positions; callers never ask for one.
pub fn circle_point(index: usize, count: usize) -> Point {
    if count == 0 {
        return Point { x: 1.0, y: 0.0 };
    }
    let angle = TAU * index as f64 / count as f64;
    Point {
        x: angle.cos(),
        y: angle.sin(),
    }
}

pub fn marker_size(question_count: usize) -> usize {
    (question_count.saturating_mul(MARKER_SCALE)).max(MIN_MARKER_SIZE)
}

pub fn edge_width(value: u32) -> u32 {
    value.max(MIN_EDGE_WIDTH)
}

/// Stable HSL color for a tag id; 12 hues, 30 degrees apart
pub fn node_color(id: TagId) -> String {
    let hue = id.rem_euclid(12) * 30;
    format!("hsl({hue}, 70%, 50%)")
}

impl TagLayout {
    pub fn circular(graph: &TagGraph) -> Self {
        let count = graph.tag_count();
        if count == 0 {
            return Self::default();
        }

        let nodes: Vec<TagNode> = graph
            .tags()
            .enumerate()
            .map(|(index, tag)| {
                let point = circle_point(index, count);
                let size = graph.question_count(tag.id);
                TagNode {
                    id: tag.id,
                    name: tag.name.clone(),
                    size,
                    x: point.x,
                    y: point.y,
                    marker_size: marker_size(size),
                    color: node_color(tag.id),
                }
            })
            .collect();

        let positions: HashMap<TagId, Point> = nodes
            .iter()
            .map(|n| (n.id, Point { x: n.x, y: n.y }))
            .collect();

        let edges = graph
            .pairs()
            .filter_map(|(pair, value)| {
                let from = positions.get(&pair.low())?;
                let to = positions.get(&pair.high())?;
                Some(TagEdge {
                    source: pair.low(),
                    target: pair.high(),
                    value,
                    width: edge_width(value),
                    from: *from,
                    to: *to,
                })
            })
            .collect();

        Self { nodes, edges }
    }
}
