//! # Displacement Settings
//!
//! Displacement is evaluated by the host; the builder only wires the shading
//! node and its scalars onto the mesh.

use crate::attributes::{names, AttributeSet, AttributeValue, NodeRef};
use crate::capabilities::Capabilities;
use crate::error::{MeshError, MeshResult};
use config::constants::{
    DEFAULT_DISP_AUTOBUMP, DEFAULT_DISP_HEIGHT, DEFAULT_DISP_PADDING, DEFAULT_DISP_ZERO_VALUE,
};
use serde::{Deserialize, Serialize};

/// Displacement settings for the generated mesh.
///
/// A `None` map disables displacement entirely: no displacement attribute is
/// written, not even neutral values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplacementSpec {
    /// Shading node providing the displacement
    pub map: Option<NodeRef>,
    /// Scale applied to the displacement
    pub height: f32,
    /// Map value that leaves the surface in place
    pub zero_value: f32,
    /// Extra bounds around displaced geometry
    pub padding: f32,
    /// Apply the map as bump where it is not displaced
    pub autobump: bool,
}

impl Default for DisplacementSpec {
    fn default() -> Self {
        Self {
            map: None,
            height: DEFAULT_DISP_HEIGHT,
            zero_value: DEFAULT_DISP_ZERO_VALUE,
            padding: DEFAULT_DISP_PADDING,
            autobump: DEFAULT_DISP_AUTOBUMP,
        }
    }
}

impl DisplacementSpec {
    /// Creates settings displacing by `map` with default scalars.
    pub fn with_map(map: NodeRef) -> Self {
        Self {
            map: Some(map),
            ..Self::default()
        }
    }

    /// Returns true if a displacement map is connected.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.map.is_some()
    }

    /// Checks the scalar settings. Skipped entirely when no map is set,
    /// since nothing would be forwarded.
    pub fn validate(&self) -> MeshResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        for (name, value) in [
            (names::DISP_HEIGHT, self.height),
            (names::DISP_ZERO_VALUE, self.zero_value),
            (names::DISP_PADDING, self.padding),
        ] {
            if !value.is_finite() {
                return Err(MeshError::invalid_parameter(
                    name,
                    format!("must be finite, got {value}"),
                ));
            }
        }
        if self.padding < 0.0 {
            return Err(MeshError::invalid_parameter(
                names::DISP_PADDING,
                format!("must be >= 0, got {}", self.padding),
            ));
        }
        Ok(())
    }
}

/// Writes the displacement attributes for `spec` into `attrs`.
///
/// Does nothing when `spec.map` is `None`.
pub fn displacement_attributes(spec: &DisplacementSpec, caps: Capabilities, attrs: &mut AttributeSet) {
    let Some(map) = spec.map else {
        return;
    };

    attrs.set(names::DISP_MAP, AttributeValue::Node(map));
    attrs.set(names::DISP_HEIGHT, AttributeValue::Float(spec.height));
    attrs.set(names::DISP_ZERO_VALUE, AttributeValue::Float(spec.zero_value));
    attrs.set(names::DISP_PADDING, AttributeValue::Float(spec.padding));
    if caps.autobump {
        attrs.set(names::DISP_AUTOBUMP, AttributeValue::Bool(spec.autobump));
    }
}
