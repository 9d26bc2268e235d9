//! Llanta player
//!
//! Hosts a [`llanta_core::Wheel`] inside an iced application. The wheel owns
//! every piece of carousel state; this crate only turns window events into
//! wheel calls and draws the resulting card transforms on a canvas.

pub mod app;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
pub mod widgets;
