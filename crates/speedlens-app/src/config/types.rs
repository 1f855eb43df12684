//! Configuration types for speedlens

use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the event-type legend next to the request list
    #[serde(default = "default_true")]
    pub show_legend: bool,

    /// Rows a details panel grows or shrinks per tick
    #[serde(default = "default_animation_step")]
    pub animation_step: u16,

    /// Event poll timeout, which is also the animation tick (ms)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_legend: true,
            animation_step: default_animation_step(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Open the details of failed requests when a capture is loaded
    #[serde(default)]
    pub expand_failed_on_load: bool,
}

fn default_true() -> bool {
    true
}

fn default_animation_step() -> u16 {
    3
}

fn default_tick_rate_ms() -> u64 {
    50
}

pub(super) const MIN_TICK_RATE_MS: u64 = 10;
pub(super) const MAX_TICK_RATE_MS: u64 = 1000;

impl Settings {
    /// Clamp out-of-range values, returning a description of each fix.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut fixes = Vec::new();

        if self.ui.animation_step == 0 {
            self.ui.animation_step = 1;
            fixes.push("ui.animation_step must be at least 1".to_string());
        }

        let clamped = self.ui.tick_rate_ms.clamp(MIN_TICK_RATE_MS, MAX_TICK_RATE_MS);
        if clamped != self.ui.tick_rate_ms {
            fixes.push(format!(
                "ui.tick_rate_ms {} out of range {}..={}, using {}",
                self.ui.tick_rate_ms, MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, clamped
            ));
            self.ui.tick_rate_ms = clamped;
        }

        fixes
    }
}
