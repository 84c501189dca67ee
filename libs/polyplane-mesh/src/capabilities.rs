//! # Host Capabilities
//!
//! Newer hosts understand adaptive subdivision and autobump on polymeshes;
//! older ones reject the extra parameters. The builder consults these flags
//! instead of keeping a separate code path per host generation.

use serde::{Deserialize, Serialize};

/// Optional polymesh features supported by the target host.
///
/// # Example
///
/// ```rust
/// use polyplane_mesh::Capabilities;
///
/// assert!(Capabilities::FULL.adaptive_subdivision);
/// assert!(!Capabilities::REDUCED.autobump);
/// assert_eq!(Capabilities::default(), Capabilities::FULL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    /// Host accepts `subdiv_adaptive_error`, `subdiv_adaptive_metric` and
    /// `subdiv_adaptive_space`.
    pub adaptive_subdivision: bool,
    /// Host accepts `disp_autobump`.
    pub autobump: bool,
}

impl Capabilities {
    /// Every optional feature enabled.
    pub const FULL: Self = Self {
        adaptive_subdivision: true,
        autobump: true,
    };

    /// Only the attributes every host understands.
    pub const REDUCED: Self = Self {
        adaptive_subdivision: false,
        autobump: false,
    };
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::FULL
    }
}
