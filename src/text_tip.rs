use log::debug;

use crate::base_types::*;
use crate::clamp::clamp_to_viewport;
use crate::host::{BoxMeasurer, DomFactory, ElementId};

/// The lightweight plain-text tooltip: a `span` synthesized next to the anchor and
/// positioned by [`clamp_to_viewport`], without going through the overlay host.
///
/// A `TextTip` is never reused. Each show creates a fresh one and each hide removes it.
#[derive(Debug)]
pub struct TextTip {
    element: ElementId,
}

impl TextTip {
    const TAG: &'static str = "span";
    pub const CLASS: &'static str = "hovertip-text";
    const Z_INDEX: &'static str = "1000";
    /// Initial placement above the anchor, used until the tip has been measured.
    const INITIAL_LIFT: f32 = 30.0;

    /// The document id used for the tooltip of a given session.
    pub fn dom_id(session: u64) -> String {
        format!("hovertip-text-{}", session)
    }

    /// Build the element and append it to the anchor's parent.
    /// Returns `None` if the anchor has no parent to attach to.
    pub fn create<P>(
        platform: &mut P,
        anchor: ElementId,
        dom_id: String,
        text: &str,
        custom_class: &str,
    ) -> Option<Self>
    where
        P: DomFactory + BoxMeasurer + ?Sized,
    {
        // A previous session's teardown may not have run yet
        if let Some(stale) = platform.get_element_by_id(&dom_id) {
            debug!("Removing stale tooltip element {:?} ({})", stale, dom_id);
            platform.remove(stale);
        }

        let parent = platform.parent_of(anchor)?;
        let anchor_box = platform.bounding_box(anchor);

        let element = platform.create_element(Self::TAG);
        platform.set_attribute(element, "id", &dom_id);
        let class = if custom_class.is_empty() {
            Self::CLASS.to_string()
        } else {
            format!("{} {}", Self::CLASS, custom_class)
        };
        platform.set_attribute(element, "class", &class);

        let text_node = platform.create_text(text);
        platform.append_child(element, text_node);

        set_position(
            platform,
            element,
            Point::new(anchor_box.left, anchor_box.top - Self::INITIAL_LIFT),
        );
        platform.set_style(element, "z-index", Self::Z_INDEX);
        platform.append_child(parent, element);

        Some(Self { element })
    }

    /// Measure the tip and move it to its clamped position next to `anchor`.
    pub fn position<P>(&self, platform: &mut P, anchor: ElementId, pointer: Option<Point>) -> Point
    where
        P: DomFactory + BoxMeasurer + ?Sized,
    {
        let anchor_box = platform.bounding_box(anchor);
        let size = platform.bounding_box(self.element).size();
        let pos = clamp_to_viewport(anchor_box, size, platform.viewport_size(), pointer);
        set_position(platform, self.element, pos);
        pos
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn remove<P: DomFactory + ?Sized>(self, platform: &mut P) {
        platform.remove(self.element);
    }
}

fn set_position<P: DomFactory + ?Sized>(platform: &mut P, element: ElementId, pos: Point) {
    platform.set_style(element, "top", &format!("{}px", pos.y));
    platform.set_style(element, "left", &format!("{}px", pos.x));
}
