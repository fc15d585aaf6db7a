//! Core value types.

pub mod media;

pub use media::*;
