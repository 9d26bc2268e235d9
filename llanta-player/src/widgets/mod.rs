pub mod wheel_canvas;

pub use wheel_canvas::{Stage, WheelCanvas};
