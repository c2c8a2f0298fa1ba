#![forbid(unsafe_code)]

//! Edge geometry for sliding panels.
//!
//! A panel enters from one screen [`Edge`]. While hidden it rests exactly one
//! screen extent away from its open position along that edge's [`Axis`]:
//! negative for `Top`/`Left`, positive for `Bottom`/`Right`. An offset of `0.0`
//! is fully open.
//!
//! # Invariants
//!
//! - `resting_offset(edge, extent).abs()` equals the extent along `edge.axis()`.
//! - The sign of the resting offset depends only on the edge.

use std::fmt;
use std::str::FromStr;

/// Screen edge a panel slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Edge {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

/// Animation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Movement along y.
    Vertical,
    /// Movement along x.
    Horizontal,
}

impl Edge {
    /// All edges, in declaration order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Axis the panel travels along.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// `-1.0` for edges at the coordinate origin (top, left), `1.0` otherwise.
    #[inline]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Top | Self::Left => -1.0,
            Self::Bottom | Self::Right => 1.0,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown edge name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEdgeError {
    input: String,
}

impl ParseEdgeError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseEdgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown edge {:?} (expected top, bottom, left, or right)",
            self.input
        )
    }
}

impl std::error::Error for ParseEdgeError {}

impl FromStr for Edge {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ParseEdgeError {
                input: other.to_owned(),
            }),
        }
    }
}

/// Logical screen size in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenExtent {
    pub width: f64,
    pub height: f64,
}

impl ScreenExtent {
    /// Create a new extent.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Length of the screen along `axis`.
    #[inline]
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

/// Signed offset at which a panel entering from `edge` rests while hidden.
#[inline]
pub fn resting_offset(edge: Edge, extent: ScreenExtent) -> f64 {
    edge.sign() * extent.along(edge.axis())
}

/// Translation applied to the panel for a given position-channel value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelTransform {
    TranslateX(f64),
    TranslateY(f64),
}

impl PanelTransform {
    /// Translate along the axis of `edge` by `offset`.
    pub fn for_edge(edge: Edge, offset: f64) -> Self {
        match edge.axis() {
            Axis::Vertical => Self::TranslateY(offset),
            Axis::Horizontal => Self::TranslateX(offset),
        }
    }

    /// The translation distance, regardless of axis.
    pub fn offset(self) -> f64 {
        match self {
            Self::TranslateX(v) | Self::TranslateY(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: ScreenExtent = ScreenExtent::new(390.0, 844.0);

    #[test]
    fn vertical_edges_use_height() {
        assert_eq!(resting_offset(Edge::Top, PHONE), -844.0);
        assert_eq!(resting_offset(Edge::Bottom, PHONE), 844.0);
    }

    #[test]
    fn horizontal_edges_use_width() {
        assert_eq!(resting_offset(Edge::Left, PHONE), -390.0);
        assert_eq!(resting_offset(Edge::Right, PHONE), 390.0);
    }

    #[test]
    fn zero_extent_rests_at_origin() {
        for edge in Edge::ALL {
            assert_eq!(resting_offset(edge, ScreenExtent::default()).abs(), 0.0);
        }
    }

    #[test]
    fn parse_round_trips_names() {
        for edge in Edge::ALL {
            assert_eq!(edge.as_str().parse::<Edge>(), Ok(edge));
            assert_eq!(edge.to_string(), edge.as_str());
        }
    }

    #[test]
    fn parse_rejects_unknown_edge() {
        let err = "center".parse::<Edge>().unwrap_err();
        assert_eq!(err.input(), "center");
        assert!(err.to_string().contains("center"));
        assert!("Top".parse::<Edge>().is_err());
    }

    #[test]
    fn default_edge_is_bottom() {
        assert_eq!(Edge::default(), Edge::Bottom);
    }

    #[test]
    fn transform_follows_axis() {
        assert_eq!(
            PanelTransform::for_edge(Edge::Bottom, 12.0),
            PanelTransform::TranslateY(12.0)
        );
        assert_eq!(
            PanelTransform::for_edge(Edge::Left, -4.0),
            PanelTransform::TranslateX(-4.0)
        );
        assert_eq!(PanelTransform::TranslateX(-4.0).offset(), -4.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Edge::Left).unwrap();
        assert_eq!(json, "\"left\"");
        assert!(serde_json::from_str::<Edge>("\"middle\"").is_err());
    }
}
