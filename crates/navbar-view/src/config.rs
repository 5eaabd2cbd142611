//! TOML configuration for a navigation bar.
//!
//! A [`NavigationBarConfig`] describes a complete bar: flags, item limits,
//! animation, an optional scroll behavior and the initial items. Every field
//! has a default, so an empty document is a valid configuration.
//!
//! # Example
//!
//! ```
//! use navbar_view::config::NavigationBarConfig;
//! use navbar_view::prelude::*;
//!
//! let config = NavigationBarConfig::from_toml_str(r##"
//! auto_check_first = true
//!
//! [limits]
//! max = 5
//!
//! [behavior]
//! kind = "lift-up"
//!
//! [[items]]
//! id = 0
//! icon = "ic_home"
//! label = "Home"
//!
//! [[items]]
//! id = 1
//! icon = "ic_search"
//! badge = "1"
//! "##).unwrap();
//!
//! let bar = config.build().unwrap();
//! assert_eq!(bar.len(), 2);
//! assert_eq!(bar.checked_id(), Some(ItemId::new(0)));
//! assert!(bar.has_behavior());
//! ```

use std::path::Path;
use std::time::Duration;

use navbar_view_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Color, Icon};
use crate::widget::animation::{Easing, DEFAULT_DURATION};
use crate::widget::widgets::BottomNavigationBar;
use crate::widget::{
    Behavior, ItemId, LabelMode, LiftUpBehavior, LiftUpSettings, NavigationBarView, NavigationItem,
};

/// Complete description of a navigation bar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationBarConfig {
    /// Give every item the same width.
    pub item_width_fixed: bool,
    /// Check the first item whenever nothing is checked.
    pub auto_check_first: bool,
    pub limits: LimitsConfig,
    pub animation: AnimationConfig,
    /// Scroll behavior to attach, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior: Option<BehaviorConfig>,
    /// Initial items in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemConfig>,
}

/// Item count limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub min: usize,
    /// Omitted for no upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
}

/// Show/hide animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration of a full show or hide, in milliseconds.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION.as_millis() as u64,
            easing: Easing::default(),
        }
    }
}

impl AnimationConfig {
    /// The duration as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Scroll behavior selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BehaviorConfig {
    /// Hide on scroll up, show on scroll down.
    LiftUp(LiftUpConfig),
}

impl BehaviorConfig {
    /// Create the configured behavior.
    pub fn build(&self) -> Box<dyn Behavior> {
        match self {
            BehaviorConfig::LiftUp(config) => {
                Box::new(LiftUpBehavior::with_settings(config.settings()))
            }
        }
    }
}

/// Settings of the lift-up behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftUpConfig {
    pub scroll_threshold: f32,
    pub fling_velocity: f32,
    pub debounce_ms: u64,
}

impl Default for LiftUpConfig {
    fn default() -> Self {
        let settings = LiftUpSettings::default();
        Self {
            scroll_threshold: settings.scroll_threshold,
            fling_velocity: settings.fling_velocity,
            debounce_ms: settings.debounce.as_millis() as u64,
        }
    }
}

impl LiftUpConfig {
    /// Convert to behavior settings.
    pub fn settings(&self) -> LiftUpSettings {
        LiftUpSettings {
            scroll_threshold: self.scroll_threshold,
            fling_velocity: self.fling_velocity,
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

/// One initial item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub id: ItemId,
    pub icon: Icon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub label_mode: LabelMode,
    /// Tint while checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Tint while unchecked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unchecked_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl ItemConfig {
    /// Create the configured item.
    pub fn build(&self) -> NavigationItem {
        let mut item = NavigationItem::new(self.id, self.icon.clone()).with_label_mode(self.label_mode);
        if let Some(label) = &self.label {
            item = item.with_label(label.clone());
        }
        if let Some(color) = self.color {
            item = item.with_color(color);
        }
        if let Some(color) = self.unchecked_color {
            item = item.with_unchecked_color(color);
        }
        if let Some(badge) = &self.badge {
            item = item.with_badge(badge.clone());
        }
        item
    }
}

impl NavigationBarConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            items = config.items.len(),
            "loaded navigation bar config"
        );
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|err| ConfigError::io(path, err))
    }

    /// Check values that the TOML schema cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(BehaviorConfig::LiftUp(lift_up)) = &self.behavior {
            if !(lift_up.scroll_threshold.is_finite() && lift_up.scroll_threshold > 0.0) {
                return Err(ConfigError::invalid_value(
                    "behavior.scroll_threshold",
                    "must be a positive number",
                ));
            }
            if !(lift_up.fling_velocity.is_finite() && lift_up.fling_velocity > 0.0) {
                return Err(ConfigError::invalid_value(
                    "behavior.fling_velocity",
                    "must be a positive number",
                ));
            }
        }
        Ok(())
    }

    /// Build a bar from this configuration.
    ///
    /// Items are added before the limits are applied, so a configuration
    /// whose items do not fit its limits is rejected as a whole.
    pub fn build(&self) -> Result<BottomNavigationBar, ConfigError> {
        self.validate()?;

        let mut bar = BottomNavigationBar::new()
            .with_item_width_fixed(self.item_width_fixed)
            .with_auto_check_first(self.auto_check_first)
            .with_animation(self.animation.duration(), self.animation.easing);

        for item in &self.items {
            bar.add(item.build().into_shared())?;
        }
        bar.set_item_limit(self.limits.min, self.limits.max)?;
        if let Some(behavior) = &self.behavior {
            bar.attach_behavior(behavior.build());
        }

        tracing::debug!(target: targets::CONFIG, items = bar.len(), "built navigation bar");
        Ok(bar)
    }
}
