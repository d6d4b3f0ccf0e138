//! The collaborators a tooltip is hosted by.
//!
//! hovertip doesn't render, mount or measure anything itself. The host UI implements these
//! traits over whatever it uses for elements and overlays, and hands an implementation of
//! [`Platform`] to the [`TooltipController`](crate::TooltipController).

use serde::{Deserialize, Serialize};

use crate::base_types::*;
use crate::event::{HostEvent, HostEventKind};
use crate::placement::{AlignmentPair, TextDirection};

/// An element owned by the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// An overlay created by the [`OverlayHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayHandle(pub u64);

/// Content mounted into an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentRef(pub u64);

/// A custom template, opaque to hovertip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u64);

/// A registered event listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

pub type Listener = Box<dyn FnMut(&HostEvent)>;

/// Called at most once, with the pair the overlay was actually placed with.
pub type SettleCallback = Box<dyn FnOnce(AlignmentPair)>;

/// What gets mounted into the overlay on the rich path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentDescriptor {
    pub template: Option<TemplateId>,
    pub custom_class: String,
}

/// A connected position strategy: tries each position in order and settles on the first that fits.
pub trait PositionStrategy {
    fn with_positions(&mut self, positions: &[AlignmentPair]);

    /// Offsets are set, not added: calling these again replaces the previous value.
    fn with_default_offset_x(&mut self, px: f32);
    fn with_default_offset_y(&mut self, px: f32);

    /// Recompute layout using the last applied position and the current offsets.
    fn reapply_last_position(&mut self);

    /// Register `callback` for the next position settle only.
    fn once_position_settled(&mut self, callback: SettleCallback);

    /// Drop any settle callback that hasn't been delivered yet.
    fn clear_position_settled(&mut self);
}

pub trait OverlayHost {
    fn create_overlay(&mut self, anchor: ElementId, positions: &[AlignmentPair]) -> OverlayHandle;
    fn attach(&mut self, overlay: OverlayHandle, content: &ContentDescriptor) -> ContentRef;
    fn detach(&mut self, overlay: OverlayHandle);
    fn dispose(&mut self, overlay: OverlayHandle);
    fn position_strategy(&mut self, overlay: OverlayHandle) -> Option<&mut dyn PositionStrategy>;

    /// Run the host's change detection synchronously.
    fn detect_changes(&mut self) {}
}

pub trait BoxMeasurer {
    /// Bounding box in viewport coordinates.
    fn bounding_box(&self, element: ElementId) -> Rect;
    fn viewport_size(&self) -> Size;
    /// Whether the element is still part of the document.
    fn is_connected(&self, element: ElementId) -> bool;
    /// Whether the pointer is currently over the element.
    fn is_hovered(&self, _element: ElementId) -> bool {
        true
    }
    fn text_direction(&self, _element: ElementId) -> TextDirection {
        TextDirection::Ltr
    }
}

pub trait EventSource {
    fn listen(&mut self, element: ElementId, kind: HostEventKind, listener: Listener) -> ListenerId;
    fn unlisten(&mut self, listener: ListenerId);
}

pub trait DomFactory {
    fn create_element(&mut self, tag: &str) -> ElementId;
    fn create_text(&mut self, text: &str) -> ElementId;
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);
    fn set_style(&mut self, element: ElementId, property: &str, value: &str);
    fn append_child(&mut self, parent: ElementId, child: ElementId);
    fn remove_child(&mut self, parent: ElementId, child: ElementId);
    fn parent_of(&self, element: ElementId) -> Option<ElementId>;
    fn get_element_by_id(&self, id: &str) -> Option<ElementId>;

    /// Detach `element` from its parent, if it has one.
    fn remove(&mut self, element: ElementId) {
        if let Some(parent) = self.parent_of(element) {
            self.remove_child(parent, element);
        }
    }
}

/// Everything a tooltip needs from its host.
pub trait Platform: OverlayHost + BoxMeasurer + EventSource + DomFactory {}

impl<T: OverlayHost + BoxMeasurer + EventSource + DomFactory> Platform for T {}
