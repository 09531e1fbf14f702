//! Tunables supplied once per attachment.

use std::fmt;

use swipekit_animation::{AnimationSpec, AnimationType, Easing};

use crate::gesture_constants::{
    BOUNCE_DURATION_MILLIS, DEFAULT_ICON_FRAME_WIDTH, DEFAULT_TRIGGER_DISTANCE, DRAG_THRESHOLD,
    SETTLE_DURATION_MILLIS,
};

/// Animations played by the state machine. Purely visual; none of these
/// delay a logical state change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeAnimations {
    /// Icon scale-up when the trigger distance is crossed.
    pub bounce_in: AnimationSpec,
    /// Icon scale-down once the bounce resets.
    pub bounce_out: AnimationSpec,
    /// Delay from the crossing until `is_bouncing` resets.
    pub bounce_reset_delay_millis: u64,
    /// Row offset returning to rest after release.
    pub settle: AnimationType,
}

impl Default for SwipeAnimations {
    fn default() -> Self {
        Self {
            bounce_in: AnimationSpec::tween(BOUNCE_DURATION_MILLIS, Easing::EaseInOut),
            bounce_out: AnimationSpec::tween(BOUNCE_DURATION_MILLIS, Easing::EaseInOut),
            bounce_reset_delay_millis: BOUNCE_DURATION_MILLIS,
            settle: AnimationType::Tween(AnimationSpec::tween(
                SETTLE_DURATION_MILLIS,
                Easing::FastOutSlowIn,
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal travel before a drag is recognized as a swipe.
    pub min_drag_distance: f32,
    /// Absolute offset beyond which the row is triggered.
    pub trigger_distance: f32,
    pub icon_frame_width: f32,
    /// When false, the first side a gesture reveals is locked until release.
    pub allows_continuous_drag: bool,
    pub action_spacing: f32,
    pub action_corner_radius: f32,
    pub animations: SwipeAnimations,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_drag_distance: DRAG_THRESHOLD,
            trigger_distance: DEFAULT_TRIGGER_DISTANCE,
            icon_frame_width: DEFAULT_ICON_FRAME_WIDTH,
            allows_continuous_drag: true,
            action_spacing: 0.0,
            action_corner_radius: 0.0,
            animations: SwipeAnimations::default(),
        }
    }
}

impl SwipeConfig {
    pub fn with_min_drag_distance(mut self, distance: f32) -> Self {
        self.min_drag_distance = distance;
        self
    }

    pub fn with_trigger_distance(mut self, distance: f32) -> Self {
        self.trigger_distance = distance;
        self
    }

    pub fn with_icon_frame_width(mut self, width: f32) -> Self {
        self.icon_frame_width = width;
        self
    }

    pub fn with_continuous_drag(mut self, allows: bool) -> Self {
        self.allows_continuous_drag = allows;
        self
    }

    pub fn with_action_spacing(mut self, spacing: f32) -> Self {
        self.action_spacing = spacing;
        self
    }

    pub fn with_action_corner_radius(mut self, radius: f32) -> Self {
        self.action_corner_radius = radius;
        self
    }

    pub fn with_animations(mut self, animations: SwipeAnimations) -> Self {
        self.animations = animations;
        self
    }

    /// Report the first invalid distance, if any.
    pub fn validate(&self) -> Result<(), SwipeConfigError> {
        let fields = [
            ("min_drag_distance", self.min_drag_distance),
            ("trigger_distance", self.trigger_distance),
            ("icon_frame_width", self.icon_frame_width),
            ("action_spacing", self.action_spacing),
            ("action_corner_radius", self.action_corner_radius),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SwipeConfigError::NonFinite { field: *field });
        }
        if self.min_drag_distance < 0.0 {
            return Err(SwipeConfigError::NegativeMinDragDistance(self.min_drag_distance));
        }
        if self.trigger_distance <= 0.0 {
            return Err(SwipeConfigError::NonPositiveTriggerDistance(self.trigger_distance));
        }
        if self.icon_frame_width < 0.0 {
            return Err(SwipeConfigError::NegativeIconFrameWidth(self.icon_frame_width));
        }
        Ok(())
    }

    /// Copy with non-finite distances replaced by defaults and negative ones
    /// clamped to zero. Valid configurations come back unchanged.
    pub fn sanitized(&self) -> Self {
        if let Err(err) = self.validate() {
            log::warn!("swipe config sanitized: {err}");
        }
        let defaults = SwipeConfig::default();
        let clamp = |value: f32, fallback: f32| {
            if value.is_finite() {
                value.max(0.0)
            } else {
                fallback
            }
        };
        Self {
            min_drag_distance: clamp(self.min_drag_distance, defaults.min_drag_distance),
            trigger_distance: clamp(self.trigger_distance, defaults.trigger_distance),
            icon_frame_width: clamp(self.icon_frame_width, defaults.icon_frame_width),
            action_spacing: clamp(self.action_spacing, defaults.action_spacing),
            action_corner_radius: clamp(self.action_corner_radius, defaults.action_corner_radius),
            ..*self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeConfigError {
    NegativeMinDragDistance(f32),
    NonPositiveTriggerDistance(f32),
    NegativeIconFrameWidth(f32),
    NonFinite { field: &'static str },
}

impl fmt::Display for SwipeConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeConfigError::NegativeMinDragDistance(value) => {
                write!(f, "min_drag_distance must not be negative, got {value}")
            }
            SwipeConfigError::NonPositiveTriggerDistance(value) => {
                write!(f, "trigger_distance must be positive, got {value}")
            }
            SwipeConfigError::NegativeIconFrameWidth(value) => {
                write!(f, "icon_frame_width must not be negative, got {value}")
            }
            SwipeConfigError::NonFinite { field } => write!(f, "{field} is not finite"),
        }
    }
}

impl std::error::Error for SwipeConfigError {}
