//! # Mesh Attributes
//!
//! Named scalar attributes the host attaches to the generated polymesh.
//! Attribute names match the host's polymesh parameter names.

use serde::{Deserialize, Serialize};

/// Host attribute names written by the builder.
pub mod names {
    /// Smooth shading normals flag.
    pub const SMOOTHING: &str = "smoothing";
    /// Subdivision scheme index.
    pub const SUBDIV_TYPE: &str = "subdiv_type";
    /// Subdivision iteration count.
    pub const SUBDIV_ITERATIONS: &str = "subdiv_iterations";
    /// Adaptive subdivision error threshold.
    pub const SUBDIV_ADAPTIVE_ERROR: &str = "subdiv_adaptive_error";
    /// Adaptive subdivision metric index.
    pub const SUBDIV_ADAPTIVE_METRIC: &str = "subdiv_adaptive_metric";
    /// Adaptive subdivision space index.
    pub const SUBDIV_ADAPTIVE_SPACE: &str = "subdiv_adaptive_space";

    /// Displacement shading node.
    pub const DISP_MAP: &str = "disp_map";
    /// Displacement height scale.
    pub const DISP_HEIGHT: &str = "disp_height";
    /// Displacement value treated as flat.
    pub const DISP_ZERO_VALUE: &str = "disp_zero_value";
    /// Bounds padding for displaced geometry.
    pub const DISP_PADDING: &str = "disp_padding";
    /// Autobump flag.
    pub const DISP_AUTOBUMP: &str = "disp_autobump";

    /// Every displacement attribute name, in emission order.
    pub const DISPLACEMENT: [&str; 5] = [
        DISP_MAP,
        DISP_HEIGHT,
        DISP_ZERO_VALUE,
        DISP_PADDING,
        DISP_AUTOBUMP,
    ];
}

/// Opaque reference to a shading node owned by the host.
///
/// The builder never dereferences it; it is only forwarded to the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef(pub u64);

/// A single scalar attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Boolean flag
    Bool(bool),
    /// Integer or enumeration index
    Int(i32),
    /// Unsigned byte
    Byte(u8),
    /// Single-precision float
    Float(f32),
    /// Host node reference
    Node(NodeRef),
}

impl AttributeValue {
    /// Returns the boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a `Float`.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            AttributeValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Int`.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the node reference, if this is a `Node`.
    pub fn as_node(&self) -> Option<NodeRef> {
        match self {
            AttributeValue::Node(n) => Some(*n),
            _ => None,
        }
    }
}

/// An insertion-ordered set of named attributes.
///
/// Setting a name twice replaces the earlier value in place, so the order
/// reflects the first time each name was written.
///
/// # Example
///
/// ```rust
/// use polyplane_mesh::{AttributeSet, AttributeValue};
///
/// let mut attrs = AttributeSet::new();
/// attrs.set("smoothing", AttributeValue::Bool(true));
/// assert_eq!(attrs.get("smoothing"), Some(&AttributeValue::Bool(true)));
/// assert!(!attrs.contains("disp_map"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttributeSet {
    entries: Vec<(&'static str, AttributeValue)>,
}

impl AttributeSet {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any earlier value.
    pub fn set(&mut self, name: &'static str, value: AttributeValue) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value)
    }

    /// Returns true if `name` has been set.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no attributes are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, AttributeValue)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the attribute names in insertion order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(n, _)| *n).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut attrs = AttributeSet::new();
        attrs.set(names::DISP_HEIGHT, AttributeValue::Float(2.5));
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get(names::DISP_HEIGHT).and_then(|v| v.as_f32()), Some(2.5));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = AttributeSet::new();
        attrs.set(names::SMOOTHING, AttributeValue::Bool(false));
        attrs.set(names::SUBDIV_TYPE, AttributeValue::Int(1));
        attrs.set(names::SMOOTHING, AttributeValue::Bool(true));

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.names(), vec![names::SMOOTHING, names::SUBDIV_TYPE]);
        assert_eq!(attrs.get(names::SMOOTHING).and_then(|v| v.as_bool()), Some(true));
    }

    #[test]
    fn test_missing_name() {
        let attrs = AttributeSet::new();
        assert!(attrs.is_empty());
        assert!(attrs.get(names::DISP_MAP).is_none());
    }

    #[test]
    fn test_value_accessors_reject_other_types() {
        let value = AttributeValue::Node(NodeRef(7));
        assert_eq!(value.as_node(), Some(NodeRef(7)));
        assert_eq!(value.as_f32(), None);
        assert_eq!(value.as_i32(), None);
        assert_eq!(value.as_bool(), None);
    }
}
