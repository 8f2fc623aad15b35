//! Cached display scaling metrics.

use bevy::prelude::*;

/// Cached description of how the logical render surface maps onto the
/// physical window.
///
/// Written only by `refresh_scaling_metrics` (on attach and on resize) and
/// read by the per-tick correction systems. Defaults to all-zero, which
/// means "not yet available" — correction math treats that as a no-op
/// rather than dividing by zero.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq)]
pub struct ScalingMetrics {
  /// Logical render surface size, in logical pixels.
  pub viewport_size: Vec2,

  /// Region of the surface actually showing content, in the same
  /// coordinate space as `viewport_size`. Smaller than the surface when
  /// letterboxed or pillarboxed.
  pub visible_rect: Rect,

  /// Physical window size, in logical pixels. Informative only; the
  /// correction formula does not use it.
  pub window_size: Vec2,
}

impl ScalingMetrics {
  pub fn new(viewport_size: Vec2, visible_rect: Rect, window_size: Vec2) -> Self {
    Self {
      viewport_size,
      visible_rect,
      window_size,
    }
  }

  /// Metrics for a surface whose visible rect covers it exactly — no
  /// letterboxing, window matches the surface. The centering term of the
  /// correction is zero under these metrics.
  pub fn covering(viewport_size: Vec2) -> Self {
    Self {
      viewport_size,
      visible_rect: Rect::from_corners(Vec2::ZERO, viewport_size),
      window_size: viewport_size,
    }
  }

  /// Whether the metrics have been populated from a live surface.
  ///
  /// A zero-size viewport means no refresh has happened yet (or the window
  /// is minimized); correction must be skipped, not computed.
  pub fn is_ready(&self) -> bool {
    self.viewport_size.x > 0.0 && self.viewport_size.y > 0.0
  }
}
