use crate::base_types::*;

/// Gap between the anchor (or pointer) and the tooltip, and the margin kept from the viewport edges.
pub const GAP: f32 = 10.0;

/// Place a floating box of `floating` size under `anchor`, or under `pointer` when given,
/// keeping it inside `viewport`. Returns the top-left corner.
///
/// The clamp is a single pass: a box that does not fit below flips above the anchor,
/// and one that overflows horizontally is pulled in from the offending edge. A box wider
/// than the viewport can still overflow; that's accepted.
pub fn clamp_to_viewport(
    anchor: Rect,
    floating: Size,
    viewport: Size,
    pointer: Option<Point>,
) -> Point {
    let (mut top, mut left) = match pointer {
        Some(p) => (p.y + GAP, p.x - floating.width / 2.0),
        None => (
            anchor.bottom() + GAP,
            anchor.left + (anchor.width - floating.width) / 2.0,
        ),
    };

    if top + floating.height > viewport.height {
        // Flip up when there isn't enough room underneath
        top = anchor.top - floating.height - GAP;
    }

    if left < 0.0 {
        left = GAP;
    } else if left + floating.width > viewport.width {
        left = viewport.width - floating.width - GAP;
    }

    Point { x: left, y: top }
}
