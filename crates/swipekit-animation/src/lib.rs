//! Animation primitives for SwipeKit
//!
//! Tweens with easing curves and spring physics, driven by the core runtime's
//! frame clock. The swipe state machine uses these for the settle-back motion
//! and the icon bounce.

pub mod animation;

pub use animation::*;

pub mod prelude {
    pub use crate::animation::{
        Animatable, AnimationSpec, AnimationType, Easing, Lerp, SpringSpec, WeakAnimatable,
    };
}
