use serde::{Deserialize, Serialize};

use wayfarer_graph::DEFAULT_CAPACITY;

/// Session-wide settings.
///
/// The canvas dimensions only matter to the bulk loader, which centers its
/// layout circle on the canvas midpoint; the graph algorithms never read
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Soft limit on the number of vertices.
    pub capacity: usize,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Radius of the circle bulk-loaded vertices are placed on.
    pub layout_radius: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            canvas_width: 800.0,
            canvas_height: 600.0,
            layout_radius: 180.0,
        }
    }
}

impl SessionConfig {
    pub fn canvas_center(&self) -> (f64, f64) {
        (self.canvas_width / 2.0, self.canvas_height / 2.0)
    }
}
