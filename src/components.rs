//! Components for pixel-snap correction.

use bevy::prelude::*;

/// Marker for a camera that receives pixel-snap correction.
///
/// Spawn alongside a `SnapCorrection`, as a top-level entity (the applied
/// correction rebuilds `GlobalTransform` from the camera's own
/// `Transform`). The `Transform` stays authoritative — follow and
/// smoothing systems keep writing it — while the correction is layered
/// onto `GlobalTransform` at the end of the frame.
#[derive(Component, Clone, Copy, Debug)]
pub struct PixelSnapCamera {
  /// Per-camera toggle. When false the stored correction is cleared and
  /// the camera renders unsnapped.
  pub enabled: bool,
}

impl Default for PixelSnapCamera {
  fn default() -> Self {
    Self { enabled: true }
  }
}

/// The correction currently applied to a snap camera.
///
/// Recomputed every selected tick; ephemeral state, never carried across
/// ticks except as the value the apply system reads.
#[derive(Component, Default, Clone, Copy, Debug, PartialEq)]
pub struct SnapCorrection(pub Vec2);
