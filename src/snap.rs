//! The correction formula: pixel snapping plus letterbox centering.

use bevy::prelude::*;

use crate::metrics::ScalingMetrics;

/// Computes the additive offset that snaps `position` to the nearest whole
/// pixel and re-centers the view when the visible rect does not sit
/// centered in the logical surface.
///
/// The result is meant to be layered on top of the camera's authoritative
/// position by whoever renders — never written back into it.
///
/// Rounding is per component via [`Vec2::round`], which rounds half away
/// from zero (`0.5 → 1`, `-0.5 → -1`). This tie-break is part of the
/// contract: positions on exact half-pixel boundaries snap away from the
/// origin.
///
/// Degenerate inputs (a zero zoom component, metrics not yet refreshed)
/// yield `Vec2::ZERO` — no correction, not an error — so an uninitialized
/// camera degrades to plain unsnapped rendering.
///
/// Pure and O(1); same inputs always give the same output.
pub fn compute_correction(position: Vec2, zoom: Vec2, metrics: &ScalingMetrics) -> Vec2 {
  if zoom.x == 0.0 || zoom.y == 0.0 || !metrics.is_ready() {
    return Vec2::ZERO;
  }

  let pixel_delta = position.round() - position;

  // Letterboxing shifts the visible content off the surface center; divide
  // by zoom to express that shift in world units.
  let viewport_center = metrics.viewport_size / 2.0;
  let visible_center = metrics.visible_rect.center();
  let centering_offset = (visible_center - viewport_center) / zoom;

  pixel_delta + centering_offset
}

#[cfg(test)]
mod tests {
  use super::*;

  const EPSILON: f32 = 1e-5;

  fn covering() -> ScalingMetrics {
    ScalingMetrics::covering(Vec2::new(640.0, 360.0))
  }

  fn assert_vec2_eq(actual: Vec2, expected: Vec2) {
    assert!(
      (actual - expected).abs().max_element() < EPSILON,
      "expected {expected:?}, got {actual:?}"
    );
  }

  #[test]
  fn reduces_to_plain_rounding_without_letterbox() {
    let metrics = covering();
    for p in [
      Vec2::new(3.7, -2.2),
      Vec2::new(0.1, 0.9),
      Vec2::new(-123.456, 789.012),
    ] {
      let correction = compute_correction(p, Vec2::ONE, &metrics);
      assert_vec2_eq(correction, p.round() - p);
    }
  }

  #[test]
  fn corrected_position_lands_on_integer_pixels() {
    let metrics = covering();
    for p in [
      Vec2::new(10.3, -4.8),
      Vec2::new(0.5, -0.5),
      Vec2::new(99.999, -0.001),
    ] {
      let snapped = p + compute_correction(p, Vec2::ONE, &metrics);
      assert_vec2_eq(snapped, snapped.round());
    }
  }

  #[test]
  fn integer_position_needs_no_correction() {
    let metrics = covering();
    let correction = compute_correction(Vec2::new(42.0, -17.0), Vec2::ONE, &metrics);
    assert_vec2_eq(correction, Vec2::ZERO);
  }

  #[test]
  fn quarter_pixel_scenario() {
    let metrics = covering();
    let correction = compute_correction(Vec2::new(100.25, 200.75), Vec2::ONE, &metrics);
    assert_vec2_eq(correction, Vec2::new(-0.25, 0.25));
  }

  #[test]
  fn half_pixel_rounds_away_from_zero() {
    let metrics = covering();
    let correction = compute_correction(Vec2::new(0.5, -0.5), Vec2::ONE, &metrics);
    // 0.5 snaps to 1, -0.5 snaps to -1
    assert_vec2_eq(correction, Vec2::new(0.5, -0.5));
  }

  #[test]
  fn zero_viewport_yields_zero_correction() {
    let metrics = ScalingMetrics::default();
    let correction = compute_correction(Vec2::new(1.3, 2.7), Vec2::ONE, &metrics);
    assert_eq!(correction, Vec2::ZERO);
  }

  #[test]
  fn zero_zoom_component_yields_zero_correction() {
    let metrics = covering();
    let correction = compute_correction(Vec2::new(1.3, 2.7), Vec2::new(0.0, 1.0), &metrics);
    assert_eq!(correction, Vec2::ZERO);
  }

  #[test]
  fn centered_letterbox_cancels() {
    // 800x600 of content centered in a 1000x600 surface: the visible
    // center coincides with the surface center, so only rounding remains.
    let metrics = ScalingMetrics::new(
      Vec2::new(1000.0, 600.0),
      Rect::new(100.0, 0.0, 900.0, 600.0),
      Vec2::new(1000.0, 600.0),
    );
    let p = Vec2::new(500.0, 300.0);
    let correction = compute_correction(p, Vec2::ONE, &metrics);
    assert_vec2_eq(correction, Vec2::ZERO);
  }

  #[test]
  fn off_center_letterbox_shifts_by_zoom() {
    // Content hugging the right edge of the surface: visible center sits
    // 100px right of the surface center.
    let metrics = ScalingMetrics::new(
      Vec2::new(1000.0, 600.0),
      Rect::new(200.0, 0.0, 1000.0, 600.0),
      Vec2::new(1000.0, 600.0),
    );
    let p = Vec2::new(4.0, 8.0);
    let correction = compute_correction(p, Vec2::new(2.0, 2.0), &metrics);
    assert_vec2_eq(correction, Vec2::new(50.0, 0.0));
  }
}
