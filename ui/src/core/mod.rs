//! Platform-agnostic building blocks shared by the views.

pub mod platform;
pub mod scroll;
pub mod timing;
