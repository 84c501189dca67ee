//! # Subdivision Settings
//!
//! Subdivision parameters forwarded to the host polymesh. Nothing is refined
//! here; the host runs the subdivision step at render time.

use crate::attributes::{names, AttributeSet, AttributeValue};
use crate::capabilities::Capabilities;
use crate::error::{MeshError, MeshResult};
use config::constants::{DEFAULT_SUBDIV_ADAPTIVE_ERROR, DEFAULT_SUBDIV_ITERATIONS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A host enumeration parameter backed by a fixed label table.
///
/// The host stores the index of the chosen label, so `index` and
/// `from_index` follow declaration order of `LABELS`.
pub trait EnumParam: Sized + Copy + 'static {
    /// Label table as declared to the host.
    const LABELS: &'static [&'static str];

    /// All variants, in label order.
    const VARIANTS: &'static [Self];

    /// Index of this variant in `LABELS`.
    fn index(self) -> i32;

    /// Variant for a host-stored index.
    fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::VARIANTS.get(i).copied())
    }

    /// Host label of this variant.
    fn label(self) -> &'static str {
        Self::LABELS[self.index() as usize]
    }

    /// Variant for a label, ignoring ASCII case.
    fn from_label(label: &str) -> Option<Self> {
        Self::LABELS
            .iter()
            .position(|l| l.eq_ignore_ascii_case(label))
            .and_then(|i| Self::VARIANTS.get(i).copied())
    }
}

/// Error returned when a label is not part of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{label}'")]
pub struct UnknownLabel {
    /// Name of the enumeration
    pub kind: &'static str,
    /// Label that did not match
    pub label: String,
}

/// Subdivision scheme applied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubdivType {
    /// No subdivision
    #[default]
    None,
    /// Catmull-Clark smooth subdivision
    CatmullClark,
    /// Linear subdivision, shape preserving
    Linear,
}

impl EnumParam for SubdivType {
    const LABELS: &'static [&'static str] = &["none", "catclark", "linear"];
    const VARIANTS: &'static [Self] = &[Self::None, Self::CatmullClark, Self::Linear];

    fn index(self) -> i32 {
        match self {
            Self::None => 0,
            Self::CatmullClark => 1,
            Self::Linear => 2,
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "catmull-clark" | "catmull_clark" => Some(Self::CatmullClark),
            other => Self::LABELS
                .iter()
                .position(|l| *l == other)
                .and_then(|i| Self::VARIANTS.get(i).copied()),
        }
    }
}

/// Error metric driving adaptive subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AdaptiveMetric {
    /// Host picks the metric
    #[default]
    Auto,
    /// Subdivide until edges are shorter than the error
    EdgeLength,
    /// Subdivide until faces are flatter than the error
    Flatness,
}

impl EnumParam for AdaptiveMetric {
    const LABELS: &'static [&'static str] = &["auto", "edge_length", "flatness"];
    const VARIANTS: &'static [Self] = &[Self::Auto, Self::EdgeLength, Self::Flatness];

    fn index(self) -> i32 {
        match self {
            Self::Auto => 0,
            Self::EdgeLength => 1,
            Self::Flatness => 2,
        }
    }
}

/// Space in which the adaptive error is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AdaptiveSpace {
    /// Error measured in pixels
    #[default]
    Raster,
    /// Error measured in object units
    Object,
}

impl EnumParam for AdaptiveSpace {
    const LABELS: &'static [&'static str] = &["raster", "object"];
    const VARIANTS: &'static [Self] = &[Self::Raster, Self::Object];

    fn index(self) -> i32 {
        match self {
            Self::Raster => 0,
            Self::Object => 1,
        }
    }
}

macro_rules! label_impls {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = UnknownLabel;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty>::from_label(s).ok_or_else(|| UnknownLabel {
                        kind: $kind,
                        label: s.to_string(),
                    })
                }
            }
        )*
    };
}

label_impls! {
    SubdivType => "subdivision type",
    AdaptiveMetric => "adaptive metric",
    AdaptiveSpace => "adaptive space",
}

/// Subdivision settings for the generated mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubdivisionSpec {
    /// Subdivision scheme
    pub kind: SubdivType,
    /// Maximum refinement steps
    pub iterations: u8,
    /// Adaptive error threshold; zero disables adaptivity
    pub adaptive_error: f32,
    /// Metric the adaptive error applies to
    pub adaptive_metric: AdaptiveMetric,
    /// Space the adaptive error is measured in
    pub adaptive_space: AdaptiveSpace,
}

impl Default for SubdivisionSpec {
    fn default() -> Self {
        Self {
            kind: SubdivType::None,
            iterations: DEFAULT_SUBDIV_ITERATIONS,
            adaptive_error: DEFAULT_SUBDIV_ADAPTIVE_ERROR,
            adaptive_metric: AdaptiveMetric::Auto,
            adaptive_space: AdaptiveSpace::Raster,
        }
    }
}

impl SubdivisionSpec {
    /// Creates settings for `kind` with `iterations`, leaving the adaptive
    /// fields at their defaults.
    pub fn new(kind: SubdivType, iterations: u8) -> Self {
        Self {
            kind,
            iterations,
            ..Self::default()
        }
    }

    /// Checks the adaptive error threshold.
    pub fn validate(&self) -> MeshResult<()> {
        if !self.adaptive_error.is_finite() || self.adaptive_error < 0.0 {
            return Err(MeshError::invalid_parameter(
                names::SUBDIV_ADAPTIVE_ERROR,
                format!("must be finite and >= 0, got {}", self.adaptive_error),
            ));
        }
        Ok(())
    }
}

/// Writes the subdivision attributes for `spec` into `attrs`.
///
/// `smoothing` is always enabled so the host's subdivision step is eligible
/// to run, whatever the subdivision type.
pub fn subdivision_attributes(spec: &SubdivisionSpec, caps: Capabilities, attrs: &mut AttributeSet) {
    attrs.set(names::SMOOTHING, AttributeValue::Bool(true));
    attrs.set(names::SUBDIV_TYPE, AttributeValue::Int(spec.kind.index()));
    attrs.set(names::SUBDIV_ITERATIONS, AttributeValue::Byte(spec.iterations));

    if caps.adaptive_subdivision {
        attrs.set(
            names::SUBDIV_ADAPTIVE_ERROR,
            AttributeValue::Float(spec.adaptive_error),
        );
        attrs.set(
            names::SUBDIV_ADAPTIVE_METRIC,
            AttributeValue::Int(spec.adaptive_metric.index()),
        );
        attrs.set(
            names::SUBDIV_ADAPTIVE_SPACE,
            AttributeValue::Int(spec.adaptive_space.index()),
        );
    }
}
