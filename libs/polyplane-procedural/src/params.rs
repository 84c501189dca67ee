//! # Parameter Values
//!
//! Reads the node's concrete parameter values into the mesh builder's specs.
//! Missing values fall back to the schema defaults; mistyped values are
//! rejected rather than coerced.

use std::collections::BTreeMap;

use polyplane_mesh::{
    AdaptiveMetric, AdaptiveSpace, Capabilities, DisplacementSpec, EnumParam, GridSpec, NodeRef,
    SubdivType, SubdivisionSpec,
};
use serde::{Deserialize, Serialize};

use crate::error::ProceduralError;
use crate::schema::{parameter_schema, ParamDecl, ParamType};

/// A concrete parameter value as stored by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Float parameter
    Float(f32),
    /// Integer parameter
    Int(i32),
    /// Byte parameter
    Byte(u8),
    /// Boolean parameter
    Bool(bool),
    /// Label index of an enumeration parameter
    Enum(i32),
    /// Node link, `None` when unconnected
    Node(Option<NodeRef>),
}

impl ParamValue {
    /// Enumeration value holding the index of `value`.
    pub fn enumeration<T: EnumParam>(value: T) -> Self {
        ParamValue::Enum(value.index())
    }

    /// Short name of the value's type, matching [`ParamType::name`].
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Float(_) => "float",
            ParamValue::Int(_) => "int",
            ParamValue::Byte(_) => "byte",
            ParamValue::Bool(_) => "bool",
            ParamValue::Enum(_) => "enum",
            ParamValue::Node(_) => "node",
        }
    }

    /// Returns true if the value can be stored in a parameter of type `ty`.
    pub fn matches(&self, ty: &ParamType) -> bool {
        matches!(
            (self, ty),
            (ParamValue::Float(_), ParamType::Float)
                | (ParamValue::Int(_), ParamType::Int)
                | (ParamValue::Byte(_), ParamType::Byte)
                | (ParamValue::Bool(_), ParamType::Bool)
                | (ParamValue::Enum(_), ParamType::Enum(_))
                | (ParamValue::Node(_), ParamType::Node)
        )
    }
}

/// Source of concrete parameter values, usually the host node itself.
pub trait ParamSource {
    /// Returns the value of `name`, or `None` if it is not set.
    fn param(&self, name: &str) -> Option<ParamValue>;
}

/// Map-backed parameter values.
///
/// # Example
///
/// ```rust
/// use polyplane_procedural::{ParamSource, ParamValue, ParameterValues};
///
/// let values = ParameterValues::new()
///     .with("width", ParamValue::Float(2.0))
///     .with("divisions", ParamValue::Int(4));
/// assert_eq!(values.param("divisions"), Some(ParamValue::Int(4)));
/// assert_eq!(values.param("disp_map"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterValues {
    values: BTreeMap<String, ParamValue>,
}

impl ParameterValues {
    /// Creates an empty set; every parameter reads as its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` and returns `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.set(name, value);
        self
    }

    /// Sets `name` to `value`, replacing any earlier value.
    pub fn set(&mut self, name: impl Into<String>, value: ParamValue) {
        self.values.insert(name.into(), value);
    }

    /// Removes `name`, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    /// Number of explicitly set parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ParamSource for ParameterValues {
    fn param(&self, name: &str) -> Option<ParamValue> {
        self.values.get(name).copied()
    }
}

/// Everything a procedural instance captures from its node at init time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneParams {
    /// Plane size and resolution
    pub grid: GridSpec,
    /// Subdivision settings
    pub subdivision: SubdivisionSpec,
    /// Displacement settings
    pub displacement: DisplacementSpec,
}

impl PlaneParams {
    /// Reads all declared parameters from `source`.
    ///
    /// Parameters the host does not declare for `caps` keep their defaults.
    ///
    /// # Errors
    ///
    /// - [`ProceduralError::ParameterType`] if a value has the wrong type
    /// - [`ProceduralError::InvalidEnum`] if an enum index has no label
    pub fn read<S: ParamSource + ?Sized>(
        source: &S,
        caps: Capabilities,
    ) -> Result<Self, ProceduralError> {
        use crate::schema::param_names::*;

        let reader = Reader {
            source,
            schema: parameter_schema(caps),
        };

        let grid = GridSpec {
            width: reader.float(WIDTH)?,
            divisions: reader.int(DIVISIONS)?,
        };

        let mut subdivision = SubdivisionSpec::new(
            reader.enumeration::<SubdivType>(SUBDIV_TYPE)?,
            reader.byte(SUBDIV_ITERATIONS)?,
        );
        if caps.adaptive_subdivision {
            subdivision.adaptive_error = reader.float(SUBDIV_ADAPTIVE_ERROR)?;
            subdivision.adaptive_metric =
                reader.enumeration::<AdaptiveMetric>(SUBDIV_ADAPTIVE_METRIC)?;
            subdivision.adaptive_space =
                reader.enumeration::<AdaptiveSpace>(SUBDIV_ADAPTIVE_SPACE)?;
        }

        let mut displacement = DisplacementSpec {
            map: reader.node(DISP_MAP)?,
            height: reader.float(DISP_HEIGHT)?,
            zero_value: reader.float(DISP_ZERO_VALUE)?,
            padding: reader.float(DISP_PADDING)?,
            ..DisplacementSpec::default()
        };
        if caps.autobump {
            displacement.autobump = reader.bool(DISP_AUTOBUMP)?;
        }

        Ok(Self {
            grid,
            subdivision,
            displacement,
        })
    }
}

struct Reader<'a, S: ?Sized> {
    source: &'a S,
    schema: Vec<ParamDecl>,
}

impl<S: ParamSource + ?Sized> Reader<'_, S> {
    /// Looks up `name`, falling back to its default and checking its type.
    fn value(&self, name: &'static str) -> Result<ParamValue, ProceduralError> {
        let decl = self
            .schema
            .iter()
            .find(|d| d.name == name)
            .copied()
            .ok_or(ProceduralError::UnknownParameter { name })?;

        let value = self.source.param(name).unwrap_or(decl.default);
        if !value.matches(&decl.ty) {
            return Err(ProceduralError::ParameterType {
                name,
                expected: decl.ty.name(),
                found: value.type_name(),
            });
        }
        Ok(value)
    }

    fn float(&self, name: &'static str) -> Result<f32, ProceduralError> {
        match self.value(name)? {
            ParamValue::Float(v) => Ok(v),
            other => Err(mismatch(name, "float", &other)),
        }
    }

    fn int(&self, name: &'static str) -> Result<i32, ProceduralError> {
        match self.value(name)? {
            ParamValue::Int(v) => Ok(v),
            other => Err(mismatch(name, "int", &other)),
        }
    }

    fn byte(&self, name: &'static str) -> Result<u8, ProceduralError> {
        match self.value(name)? {
            ParamValue::Byte(v) => Ok(v),
            other => Err(mismatch(name, "byte", &other)),
        }
    }

    fn bool(&self, name: &'static str) -> Result<bool, ProceduralError> {
        match self.value(name)? {
            ParamValue::Bool(v) => Ok(v),
            other => Err(mismatch(name, "bool", &other)),
        }
    }

    fn node(&self, name: &'static str) -> Result<Option<NodeRef>, ProceduralError> {
        match self.value(name)? {
            ParamValue::Node(v) => Ok(v),
            other => Err(mismatch(name, "node", &other)),
        }
    }

    fn enumeration<T: EnumParam>(&self, name: &'static str) -> Result<T, ProceduralError> {
        match self.value(name)? {
            ParamValue::Enum(index) => {
                T::from_index(index).ok_or(ProceduralError::InvalidEnum { name, index })
            }
            other => Err(mismatch(name, "enum", &other)),
        }
    }
}

fn mismatch(name: &'static str, expected: &'static str, found: &ParamValue) -> ProceduralError {
    ProceduralError::ParameterType {
        name,
        expected,
        found: found.type_name(),
    }
}
