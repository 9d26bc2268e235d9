//! Llanta core library
//!
//! Framework-free model of the wheel carousel: a single rotation angle,
//! driven by drag gestures, keyboard steps or an autoplay timer, from which
//! every card's screen transform is derived.
//!
//! Notes
//! - Angles are degrees throughout; rotation is unbounded and only
//!   normalized where a position is derived from it.
//! - Nothing here touches a windowing or rendering toolkit; hosts translate
//!   their input events into [`Wheel`] calls and draw [`ItemTransform`]s.

pub mod angle;
pub mod animation;
pub mod autoplay;
pub mod catalog;
pub mod constants;
pub mod easing;
pub mod error;
pub mod gesture;
pub mod keyboard;
pub mod slots;
pub mod transform;
pub mod tuning;
pub mod wheel;

pub use animation::{AnimationReason, RotationAnimator};
pub use catalog::{CarouselItem, default_catalog};
pub use easing::Easing;
pub use error::{Result, WheelError};
pub use gesture::{Damping, DragTracker, PointerKind};
pub use keyboard::NavKey;
pub use transform::{ItemTransform, Range, TransformProfile};
pub use tuning::{WheelProfile, WheelTuning};
pub use wheel::{Wheel, WheelEvent};
