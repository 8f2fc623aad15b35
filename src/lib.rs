//! Pixel-snapping camera correction for 2D pixel art.
//!
//! A camera that follows a smoothly-moving target sits between pixels most
//! frames, which makes nearest-neighbor-scaled art shimmer. This plugin
//! computes, once per selected tick, the additive offset that snaps the
//! camera to the nearest whole pixel and re-centers the view when the
//! visible area is letterboxed — and layers that offset onto the camera's
//! `GlobalTransform` without ever touching the `Transform` that follow and
//! smoothing systems own.
//!
//! # Usage
//!
//! ```ignore
//! use bevy_pixel_snap::{PixelSnapPlugin, PixelSnapCamera, SnapCorrection};
//!
//! app.add_plugins(PixelSnapPlugin);
//!
//! commands.spawn((
//!     Camera2d,
//!     PixelSnapCamera::default(),
//!     SnapCorrection::default(),
//!     // ...
//! ));
//! ```
//!
//! # Tick selection
//!
//! `PixelSnapConfig::use_physics_tick` picks where the correction is
//! computed: the fixed simulation tick (`FixedPostUpdate`, the default) or
//! the presentation tick (`PostUpdate`). It must match whichever tick moves
//! the followed target — computing on the other tick reintroduces one frame
//! of lag. Application always happens in `PostUpdate` after transform
//! propagation, inside [`PixelSnapSet`].

mod components;
mod config;
mod metrics;
mod snap;
mod systems;

use bevy::prelude::*;
use bevy::transform::TransformSystems;
pub use components::{PixelSnapCamera, SnapCorrection};
pub use config::{PixelSnapConfig, SnapTick};
pub use metrics::ScalingMetrics;
pub use snap::compute_correction;
pub use systems::{
  apply_snap_correction, clear_snap_correction, compute_snap_correction, refresh_scaling_metrics,
};

/// System set for pixel-snap systems.
///
/// Runs in `PostUpdate` after `TransformSystems::Propagate`.
/// Schedule camera follow systems to run **before** this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelSnapSet;

/// Plugin for pixel-snapping camera correction.
///
/// Add after `DefaultPlugins`, mark the game camera with
/// [`PixelSnapCamera`] and give it a [`SnapCorrection`].
pub struct PixelSnapPlugin;

impl Plugin for PixelSnapPlugin {
  fn build(&self, app: &mut App) {
    app.init_resource::<PixelSnapConfig>();
    app.init_resource::<ScalingMetrics>();

    app.configure_sets(
      PostUpdate,
      PixelSnapSet.after(TransformSystems::Propagate),
    );

    // Simulation-tick path: recompute after fixed-step movement has
    // written the camera transform.
    app.add_systems(
      FixedPostUpdate,
      systems::compute_snap_correction.run_if(simulation_compute_active),
    );

    // Presentation-tick path plus the always-on glue. The correction is
    // applied after transform propagation so parenting is already
    // resolved; the unselected compute path never runs.
    app.add_systems(
      PostUpdate,
      (
        systems::refresh_scaling_metrics,
        systems::compute_snap_correction.run_if(presentation_compute_active),
        systems::clear_snap_correction.run_if(not(pixel_snap_enabled)),
        systems::apply_snap_correction,
      )
        .chain()
        .in_set(PixelSnapSet),
    );
  }
}

/// Run condition: Returns true while the master switch is on.
fn pixel_snap_enabled(config: Res<PixelSnapConfig>) -> bool {
  config.pixel_perfect_enabled
}

/// Run condition: Compute on the fixed simulation tick.
fn simulation_compute_active(config: Res<PixelSnapConfig>) -> bool {
  config.pixel_perfect_enabled && config.tick() == SnapTick::Simulation
}

/// Run condition: Compute on the presentation tick.
fn presentation_compute_active(config: Res<PixelSnapConfig>) -> bool {
  config.pixel_perfect_enabled && config.tick() == SnapTick::Presentation
}
