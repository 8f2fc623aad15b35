//! Systems for metrics refresh, per-tick correction, and application.

use bevy::log::warn_once;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::{PixelSnapCamera, SnapCorrection};
use crate::metrics::ScalingMetrics;
use crate::snap::compute_correction;

/// System: Recomputes `ScalingMetrics` from the primary window.
///
/// Runs every frame but only rebuilds the cache when the physical window
/// size changed (resize, fullscreen toggle). The first frame with a live
/// window populates the initial metrics. A `Camera.viewport` change with
/// no accompanying window resize is not detected; the metrics stay stale
/// until the next size change.
pub fn refresh_scaling_metrics(
  mut metrics: ResMut<ScalingMetrics>,
  windows: Query<&Window, With<PrimaryWindow>>,
  cameras: Query<&Camera, With<PixelSnapCamera>>,
  mut last_window_size: Local<(u32, u32)>,
) {
  let Ok(window) = windows.single() else {
    return;
  };

  let window_size = (window.physical_width(), window.physical_height());
  if *last_window_size == window_size {
    return;
  }
  if window_size.0 == 0 || window_size.1 == 0 {
    return;
  }
  *last_window_size = window_size;

  let surface = Vec2::new(window.width(), window.height());

  // A camera without an explicit sub-viewport shows content across the
  // whole surface.
  if cameras.iter().len() > 1 {
    warn!("multiple snap cameras share one surface; visible rect falls back to the full surface");
  }
  let visible_rect = cameras
    .single()
    .ok()
    .and_then(|camera| camera.logical_viewport_rect())
    .unwrap_or(Rect::from_corners(Vec2::ZERO, surface));

  *metrics = ScalingMetrics::new(surface, visible_rect, surface);

  info!(
    "Scaling metrics refreshed: surface {}x{}, visible rect {:?}",
    surface.x, surface.y, visible_rect
  );
}

/// System: Computes the per-tick snap correction for each snap camera.
///
/// Registered on exactly one of `FixedPostUpdate` (simulation tick) or
/// `PostUpdate` (presentation tick), selected by
/// `PixelSnapConfig::use_physics_tick`. Reads the authoritative
/// `Transform` and writes only `SnapCorrection`.
pub fn compute_snap_correction(
  metrics: Res<ScalingMetrics>,
  mut cameras: Query<(
    &Transform,
    &Projection,
    &PixelSnapCamera,
    &mut SnapCorrection,
  )>,
) {
  if !metrics.is_ready() && !cameras.is_empty() {
    warn_once!("snap correction requested before scaling metrics were refreshed");
  }

  for (transform, projection, snap_camera, mut correction) in cameras.iter_mut() {
    if !snap_camera.enabled {
      correction.0 = Vec2::ZERO;
      continue;
    }

    // Bevy's orthographic scale is world units per screen unit — the
    // reciprocal of a zoom factor.
    let zoom = match projection {
      Projection::Orthographic(ortho) if ortho.scale != 0.0 => Vec2::splat(ortho.scale.recip()),
      _ => {
        correction.0 = Vec2::ZERO;
        continue;
      }
    };

    correction.0 = compute_correction(transform.translation.truncate(), zoom, &metrics);
  }
}

/// System: Layers the stored correction onto the camera's `GlobalTransform`.
///
/// Runs in `PostUpdate` after `TransformSystems::Propagate` and rebuilds
/// the camera's global from its authoritative `Transform` plus the
/// correction. Rebuilding (instead of adding onto the propagated value)
/// keeps the result exact when propagation skips an unchanged `Transform`,
/// and `set_if_neq` makes zero-correction frames a no-op. `Transform`
/// itself is never written; follow and smoothing systems keep sole
/// ownership of it. Snap cameras must be top-level entities.
pub fn apply_snap_correction(
  mut cameras: Query<(&Transform, &mut GlobalTransform, &SnapCorrection), With<PixelSnapCamera>>,
) {
  for (transform, mut global, correction) in cameras.iter_mut() {
    let mut corrected = *transform;
    corrected.translation += correction.0.extend(0.0);
    global.set_if_neq(GlobalTransform::from(corrected));
  }
}

/// System: Zeroes stored corrections while snapping is disabled.
///
/// Runs instead of the compute path when the master switch is off, so a
/// correction from a previously live state cannot stick to the camera.
pub fn clear_snap_correction(
  mut corrections: Query<&mut SnapCorrection, With<PixelSnapCamera>>,
) {
  for mut correction in corrections.iter_mut() {
    if correction.0 != Vec2::ZERO {
      correction.0 = Vec2::ZERO;
    }
  }
}
