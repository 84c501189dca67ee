//! # Config Crate
//!
//! Centralized configuration constants for the PolyPlane procedural.
//! Parameter defaults, safety limits and scene-graph names are defined here
//! so the mesh builder and the host binding agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_DIVISIONS, DEFAULT_WIDTH, QUAD_SIDES};
//!
//! let faces = (DEFAULT_DIVISIONS * DEFAULT_DIVISIONS) as usize;
//! let indices = faces * QUAD_SIDES as usize;
//! assert_eq!(indices, 16);
//! assert!(DEFAULT_WIDTH > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Defaults match the renderer-side parameter declarations

pub mod constants;
