//! Shotmap Core Types and Label Placement
//!
//! This crate provides the foundational types for rendering football shot
//! maps, and the force-directed label placement engine. It includes:
//!
//! - **Geometry**: Points and bounding boxes in data units ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Strokes and layered SVG output ([`draw`] module)
//! - **Label**: Non-overlapping label layout with leader lines ([`label`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod label;
