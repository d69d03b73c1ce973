//! Braid Core Types and Definitions
//!
//! This crate provides the foundational types shared by every Braid crate.
//! It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: SVG output accumulation and stroke definitions ([`draw`] module)
//! - **Semantic**: The composition model consumed by the engine ([`semantic`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
