//! Staggered entrance reveals for the hero elements.
//!
//! Split the way the task modules are: a pure state machine in `engine` and
//! the Dioxus wiring in `hooks`.

pub mod engine;
pub mod hooks;

pub use engine::{RevealConfig, RevealPhase, RevealState};
pub use hooks::{use_fade_in, FadeIn};
