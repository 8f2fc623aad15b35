//! Configuration for pixel-snap correction.

use bevy::prelude::*;
use serde::Deserialize;

/// Which per-frame tick drives correction computation.
///
/// The correction must be computed on whichever tick moves the followed
/// target. Running on the other tick reintroduces one frame of lag and
/// visible jitter; the plugin cannot detect a mismatch, so this is a usage
/// contract for the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapTick {
  /// Fixed-timestep tick (`FixedPostUpdate`). Pick this when the followed
  /// target moves under fixed-step physics.
  Simulation,

  /// Render-frame tick (`PostUpdate`). Pick this when the followed target
  /// moves in `Update`.
  Presentation,
}

/// Configuration for the pixel-snap plugin.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PixelSnapConfig {
  /// Master switch. When false no correction is computed and any stored
  /// correction is cleared, so a stale offset cannot stick.
  pub pixel_perfect_enabled: bool,

  /// Selects the simulation tick over the presentation tick.
  /// Must match the tick that moves the followed target.
  pub use_physics_tick: bool,
}

impl Default for PixelSnapConfig {
  fn default() -> Self {
    Self {
      pixel_perfect_enabled: true,
      use_physics_tick: true,
    }
  }
}

impl PixelSnapConfig {
  /// The tick selected by `use_physics_tick`.
  pub fn tick(&self) -> SnapTick {
    if self.use_physics_tick {
      SnapTick::Simulation
    } else {
      SnapTick::Presentation
    }
  }

  /// Parses a config from a TOML table. Missing keys keep their defaults.
  pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(source)
  }
}
