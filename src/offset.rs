use crate::placement::{AlignmentPair, HorizontalEdge, VerticalEdge};

/// A signed gap between the anchor and the tooltip. Positive values push right/down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisOffset {
    pub x: f32,
    pub y: f32,
}

/// Offset that pushes the tooltip `offset_px` away from the anchor, given the pair the
/// overlay host actually applied. This may be the fallback rather than the primary, so
/// the sign has to come from the applied pair and not from the requested side.
///
/// Only one axis is ever non-zero. The vertical edge wins when both are off-center.
pub fn axis_offset(applied: AlignmentPair, offset_px: f32) -> AxisOffset {
    let offset_px = offset_px.max(0.0);
    match (applied.anchor_y, applied.anchor_x) {
        (VerticalEdge::Bottom, _) => AxisOffset {
            x: 0.0,
            y: offset_px,
        },
        (VerticalEdge::Top, _) => AxisOffset {
            x: 0.0,
            y: -offset_px,
        },
        (VerticalEdge::Center, HorizontalEdge::End) => AxisOffset {
            x: offset_px,
            y: 0.0,
        },
        (VerticalEdge::Center, HorizontalEdge::Start) => AxisOffset {
            x: -offset_px,
            y: 0.0,
        },
        (VerticalEdge::Center, HorizontalEdge::Center) => AxisOffset::default(),
    }
}
