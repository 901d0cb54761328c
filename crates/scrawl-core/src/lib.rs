//! Core value types shared by the Scrawl crates.
//!
//! Grid coordinates ([`cell`]), device-space geometry ([`geometry`]), and the
//! traced output model ([`shape`], [`text`], [`diagram`]) live here so that
//! the recognizer and the renderers agree on one vocabulary.

pub mod cell;
pub mod color;
pub mod diagram;
pub mod geometry;
pub mod shape;
pub mod stroke;
pub mod text;
