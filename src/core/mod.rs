//! Core module - the greeting emitter

pub mod greeting;
