//! An in-memory [`Platform`] for tests.

use hashbrown::HashMap;

use crate::base_types::*;
use crate::event::{HostEvent, HostEventKind};
use crate::host::*;
use crate::placement::{AlignmentPair, TextDirection};

#[derive(Debug, Default)]
struct FakeElement {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    text: Option<String>,
    rect: Rect,
}

#[derive(Default)]
pub struct FakeStrategy {
    pub positions: Vec<AlignmentPair>,
    pub offset_x: f32,
    pub offset_y: f32,
    pub reapply_count: usize,
    settle_callbacks: Vec<SettleCallback>,
}

impl FakeStrategy {
    pub fn pending_settle_callbacks(&self) -> usize {
        self.settle_callbacks.len()
    }
}

impl PositionStrategy for FakeStrategy {
    fn with_positions(&mut self, positions: &[AlignmentPair]) {
        self.positions = positions.to_vec();
    }

    fn with_default_offset_x(&mut self, px: f32) {
        self.offset_x = px;
    }

    fn with_default_offset_y(&mut self, px: f32) {
        self.offset_y = px;
    }

    fn reapply_last_position(&mut self) {
        self.reapply_count += 1;
    }

    fn once_position_settled(&mut self, callback: SettleCallback) {
        self.settle_callbacks.push(callback);
    }

    fn clear_position_settled(&mut self) {
        self.settle_callbacks.clear();
    }
}

pub struct FakeOverlay {
    pub anchor: ElementId,
    pub strategy: FakeStrategy,
    pub content: Option<(ContentRef, ContentDescriptor)>,
    pub disposed: bool,
}

struct FakeListener {
    element: ElementId,
    kind: HostEventKind,
    listener: Listener,
}

pub struct FakePlatform {
    next_id: u64,
    root: ElementId,
    elements: HashMap<ElementId, FakeElement>,
    listeners: HashMap<ListenerId, FakeListener>,
    overlays: HashMap<OverlayHandle, FakeOverlay>,
    viewport: Size,
    tooltip_size: Size,
    hovered: bool,
    direction: TextDirection,
    pub overlays_created: usize,
    pub attach_count: usize,
    pub detach_count: usize,
    pub change_detections: usize,
}

impl FakePlatform {
    pub fn new() -> Self {
        let root = ElementId(0);
        let mut elements = HashMap::new();
        elements.insert(root, FakeElement::default());
        Self {
            next_id: 1,
            root,
            elements,
            listeners: HashMap::new(),
            overlays: HashMap::new(),
            viewport: Size::new(800.0, 600.0),
            tooltip_size: Size::new(40.0, 20.0),
            hovered: true,
            direction: TextDirection::Ltr,
            overlays_created: 0,
            attach_count: 0,
            detach_count: 0,
            change_detections: 0,
        }
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// An anchor under a container that is part of the document.
    pub fn add_anchor(&mut self, rect: Rect) -> ElementId {
        let container = ElementId(self.next());
        self.elements.insert(container, FakeElement::default());
        self.append_child(self.root, container);

        let anchor = ElementId(self.next());
        self.elements.insert(
            anchor,
            FakeElement {
                rect,
                ..Default::default()
            },
        );
        self.append_child(container, anchor);
        anchor
    }

    /// An anchor with no parent at all.
    pub fn add_orphan(&mut self, rect: Rect) -> ElementId {
        let anchor = ElementId(self.next());
        self.elements.insert(
            anchor,
            FakeElement {
                rect,
                ..Default::default()
            },
        );
        anchor
    }

    /// Take `element` out of the document, keeping its parent's subtree intact.
    pub fn disconnect(&mut self, element: ElementId) {
        if let Some(parent) = self.parent_of(element) {
            let grandparent = self.parent_of(parent);
            if let Some(gp) = grandparent {
                self.remove_child(gp, parent);
            }
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Size reported for every element created from now on.
    pub fn set_tooltip_size(&mut self, size: Size) {
        self.tooltip_size = size;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_direction(&mut self, direction: TextDirection) {
        self.direction = direction;
    }

    pub fn is_attached(&self, element: ElementId) -> bool {
        let mut current = Some(element);
        while let Some(id) = current {
            if id == self.root {
                return true;
            }
            current = self.elements.get(&id).and_then(|e| e.parent);
        }
        false
    }

    pub fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        self.elements
            .get(&element)
            .and_then(|e| e.attributes.get(name))
            .map(|s| s.as_str())
    }

    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.elements
            .get(&element)
            .and_then(|e| e.styles.get(property))
            .map(|s| s.as_str())
    }

    pub fn text_of(&self, element: ElementId) -> String {
        self.elements
            .get(&element)
            .map(|e| {
                e.children
                    .iter()
                    .filter_map(|c| self.elements.get(c).and_then(|c| c.text.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of elements in the document carrying `id`.
    pub fn count_with_id(&self, id: &str) -> usize {
        self.elements
            .iter()
            .filter(|(el, e)| {
                e.attributes.get("id").map(|s| s.as_str()) == Some(id) && self.is_attached(**el)
            })
            .count()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn listener_count_for(&self, kind: HostEventKind) -> usize {
        self.listeners.values().filter(|l| l.kind == kind).count()
    }

    /// Deliver an event to every listener registered for it on `element`.
    pub fn fire(&mut self, element: ElementId, event: HostEvent) {
        for l in self.listeners.values_mut() {
            if l.element == element && l.kind == event.kind {
                (l.listener)(&event);
            }
        }
    }

    pub fn overlay(&self, handle: OverlayHandle) -> &FakeOverlay {
        &self.overlays[&handle]
    }

    pub fn mounted_count(&self) -> usize {
        self.overlays
            .values()
            .filter(|o| o.content.is_some())
            .count()
    }

    /// Settle `handle` on `pair`, as the overlay host would after laying it out.
    pub fn settle(&mut self, handle: OverlayHandle, pair: AlignmentPair) {
        let callbacks: Vec<SettleCallback> = self
            .overlays
            .get_mut(&handle)
            .map(|o| o.strategy.settle_callbacks.drain(..).collect())
            .unwrap_or_default();
        for callback in callbacks {
            callback(pair);
        }
    }
}

impl OverlayHost for FakePlatform {
    fn create_overlay(&mut self, anchor: ElementId, positions: &[AlignmentPair]) -> OverlayHandle {
        let handle = OverlayHandle(self.next());
        self.overlays_created += 1;
        self.overlays.insert(
            handle,
            FakeOverlay {
                anchor,
                strategy: FakeStrategy {
                    positions: positions.to_vec(),
                    ..Default::default()
                },
                content: None,
                disposed: false,
            },
        );
        handle
    }

    fn attach(&mut self, overlay: OverlayHandle, content: &ContentDescriptor) -> ContentRef {
        let content_ref = ContentRef(self.next());
        self.attach_count += 1;
        if let Some(o) = self.overlays.get_mut(&overlay) {
            assert!(o.content.is_none(), "Overlay already has content attached");
            o.content = Some((content_ref, content.clone()));
        }
        content_ref
    }

    fn detach(&mut self, overlay: OverlayHandle) {
        self.detach_count += 1;
        if let Some(o) = self.overlays.get_mut(&overlay) {
            o.content = None;
        }
    }

    fn dispose(&mut self, overlay: OverlayHandle) {
        if let Some(o) = self.overlays.get_mut(&overlay) {
            o.content = None;
            o.disposed = true;
            o.strategy.settle_callbacks.clear();
        }
    }

    fn position_strategy(&mut self, overlay: OverlayHandle) -> Option<&mut dyn PositionStrategy> {
        self.overlays
            .get_mut(&overlay)
            .filter(|o| !o.disposed)
            .map(|o| &mut o.strategy as &mut dyn PositionStrategy)
    }

    fn detect_changes(&mut self) {
        self.change_detections += 1;
    }
}

impl BoxMeasurer for FakePlatform {
    fn bounding_box(&self, element: ElementId) -> Rect {
        self.elements
            .get(&element)
            .map(|e| e.rect)
            .unwrap_or_default()
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn is_connected(&self, element: ElementId) -> bool {
        self.is_attached(element)
    }

    fn is_hovered(&self, _element: ElementId) -> bool {
        self.hovered
    }

    fn text_direction(&self, _element: ElementId) -> TextDirection {
        self.direction
    }
}

impl EventSource for FakePlatform {
    fn listen(&mut self, element: ElementId, kind: HostEventKind, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next());
        self.listeners.insert(
            id,
            FakeListener {
                element,
                kind,
                listener,
            },
        );
        id
    }

    fn unlisten(&mut self, listener: ListenerId) {
        self.listeners.remove(&listener);
    }
}

impl DomFactory for FakePlatform {
    fn create_element(&mut self, _tag: &str) -> ElementId {
        let id = ElementId(self.next());
        let size = self.tooltip_size;
        self.elements.insert(
            id,
            FakeElement {
                rect: Rect::from_pos_size(Point::default(), size),
                ..Default::default()
            },
        );
        id
    }

    fn create_text(&mut self, text: &str) -> ElementId {
        let id = ElementId(self.next());
        self.elements.insert(
            id,
            FakeElement {
                text: Some(text.to_string()),
                ..Default::default()
            },
        );
        id
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(&element) {
            e.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(&element) {
            e.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if let Some(c) = self.elements.get_mut(&child) {
            c.parent = Some(parent);
        }
        if let Some(p) = self.elements.get_mut(&parent) {
            p.children.push(child);
        }
    }

    fn remove_child(&mut self, parent: ElementId, child: ElementId) {
        if let Some(p) = self.elements.get_mut(&parent) {
            p.children.retain(|c| *c != child);
        }
        if let Some(c) = self.elements.get_mut(&child)
            && c.parent == Some(parent)
        {
            c.parent = None;
        }
    }

    fn parent_of(&self, element: ElementId) -> Option<ElementId> {
        self.elements.get(&element).and_then(|e| e.parent)
    }

    fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(el, e)| {
                e.attributes.get("id").map(|s| s.as_str()) == Some(id) && self.is_attached(**el)
            })
            .map(|(el, _)| *el)
    }
}
