//! Wall external pressure coefficients, ASCE 7-22 Figure 27.3-1.

/// Windward wall, any L/B.
pub const WINDWARD_WALL_CP: f64 = 0.8;

/// Side walls, any L/B.
pub const SIDE_WALL_CP: f64 = -0.7;

/// L/B anchors of the leeward wall coefficient.
pub static LEEWARD_WALL_RATIOS: [f64; 3] = [1.0, 2.0, 4.0];

/// Leeward wall coefficient at each L/B anchor.
pub static LEEWARD_WALL_CP: [f64; 3] = [-0.5, -0.3, -0.2];
