//! Resolving a logical side preference into concrete alignment pairs.
//!
//! A tooltip is attached by binding one edge of the floating box to one edge of the
//! anchor box. Each side yields a primary pair and a fallback pair that mirrors it
//! along the axis the side constrains, which the overlay host switches to when the
//! primary does not fit.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TooltipError};

/// Logical placement preference, independent of text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Above,
    #[default]
    Below,
    /// Left of the anchor in ltr, right of it in rtl.
    Before,
    /// Right of the anchor in ltr, left of it in rtl.
    After,
}

impl Side {
    /// The axis along which this side places the tooltip, and along which its fallback flips.
    pub fn axis(self) -> Axis {
        match self {
            Side::Above | Side::Below => Axis::Vertical,
            Side::Before | Side::After => Axis::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalEdge {
    Start,
    Center,
    End,
}

impl HorizontalEdge {
    pub fn flip(self) -> Self {
        match self {
            HorizontalEdge::Start => HorizontalEdge::End,
            HorizontalEdge::Center => HorizontalEdge::Center,
            HorizontalEdge::End => HorizontalEdge::Start,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalEdge {
    Top,
    Center,
    Bottom,
}

impl VerticalEdge {
    pub fn flip(self) -> Self {
        match self {
            VerticalEdge::Top => VerticalEdge::Bottom,
            VerticalEdge::Center => VerticalEdge::Center,
            VerticalEdge::Bottom => VerticalEdge::Top,
        }
    }
}

/// Binds the `floating` edges of the tooltip to the `anchor` edges of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlignmentPair {
    pub anchor_x: HorizontalEdge,
    pub anchor_y: VerticalEdge,
    pub floating_x: HorizontalEdge,
    pub floating_y: VerticalEdge,
}

impl AlignmentPair {
    pub fn new(
        anchor_x: HorizontalEdge,
        anchor_y: VerticalEdge,
        floating_x: HorizontalEdge,
        floating_y: VerticalEdge,
    ) -> Self {
        Self {
            anchor_x,
            anchor_y,
            floating_x,
            floating_y,
        }
    }

    /// Mirror both the anchor and floating edges along `axis`. The other axis is left alone.
    pub fn invert(self, axis: Axis) -> Self {
        match axis {
            Axis::Vertical => Self {
                anchor_y: self.anchor_y.flip(),
                floating_y: self.floating_y.flip(),
                ..self
            },
            Axis::Horizontal => Self {
                anchor_x: self.anchor_x.flip(),
                floating_x: self.floating_x.flip(),
                ..self
            },
        }
    }
}

/// A side as written in configuration. `Left` and `Right` are accepted for
/// compatibility and resolve to `Before`/`After` depending on text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RequestedSide {
    Logical(Side),
    Left,
    Right,
}

impl Default for RequestedSide {
    fn default() -> Self {
        RequestedSide::Logical(Side::default())
    }
}

impl From<Side> for RequestedSide {
    fn from(side: Side) -> Self {
        RequestedSide::Logical(side)
    }
}

impl RequestedSide {
    pub fn normalize(self, direction: TextDirection) -> Side {
        match (self, direction) {
            (RequestedSide::Logical(side), _) => side,
            (RequestedSide::Left, TextDirection::Ltr) => Side::Before,
            (RequestedSide::Left, TextDirection::Rtl) => Side::After,
            (RequestedSide::Right, TextDirection::Ltr) => Side::After,
            (RequestedSide::Right, TextDirection::Rtl) => Side::Before,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestedSide::Logical(Side::Above) => "above",
            RequestedSide::Logical(Side::Below) => "below",
            RequestedSide::Logical(Side::Before) => "before",
            RequestedSide::Logical(Side::After) => "after",
            RequestedSide::Left => "left",
            RequestedSide::Right => "right",
        }
    }
}

impl FromStr for RequestedSide {
    type Err = TooltipError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "above" => Ok(Side::Above.into()),
            "below" => Ok(Side::Below.into()),
            "before" => Ok(Side::Before.into()),
            "after" => Ok(Side::After.into()),
            "left" => Ok(RequestedSide::Left),
            "right" => Ok(RequestedSide::Right),
            _ => Err(TooltipError::InvalidConfiguration(format!(
                "unknown tooltip side {:?}",
                s
            ))),
        }
    }
}

impl TryFrom<String> for RequestedSide {
    type Error = TooltipError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<RequestedSide> for String {
    fn from(side: RequestedSide) -> Self {
        side.as_str().to_string()
    }
}

impl fmt::Display for RequestedSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedPlacement {
    /// The side the pairs were resolved for, after normalizing legacy names.
    pub side: Side,
    pub primary: AlignmentPair,
    pub fallback: AlignmentPair,
}

impl ResolvedPlacement {
    /// Positions in the order the overlay host should try them.
    pub fn positions(&self) -> [AlignmentPair; 2] {
        [self.primary, self.fallback]
    }
}

/// Resolve a side preference into its primary and fallback alignment pairs.
pub fn resolve(side: RequestedSide, direction: TextDirection) -> ResolvedPlacement {
    use HorizontalEdge as H;
    use VerticalEdge as V;

    let side = side.normalize(direction);
    let primary = match (side, direction) {
        (Side::Above, _) => AlignmentPair::new(H::Center, V::Top, H::Center, V::Bottom),
        (Side::Below, _) => AlignmentPair::new(H::Center, V::Bottom, H::Center, V::Top),
        (Side::Before, TextDirection::Ltr) | (Side::After, TextDirection::Rtl) => {
            AlignmentPair::new(H::Start, V::Center, H::End, V::Center)
        }
        (Side::Before, TextDirection::Rtl) | (Side::After, TextDirection::Ltr) => {
            AlignmentPair::new(H::End, V::Center, H::Start, V::Center)
        }
    };

    ResolvedPlacement {
        side,
        primary,
        fallback: primary.invert(side.axis()),
    }
}

/// Like [`resolve`], for a side given by name. Unknown names are an error rather
/// than silently falling back to a default side.
pub fn resolve_named(side: &str, direction: TextDirection) -> Result<ResolvedPlacement> {
    Ok(resolve(side.parse()?, direction))
}
