//! The tooltip lifecycle: when to show, where, and how to clean up.
//!
//! A [`TooltipController`] is attached to one host element. Listeners it registers on
//! that element never call into it; they send a [`TooltipMsg`] down a channel, and
//! [`TooltipController::process_events`] applies queued messages in order as state
//! transitions:
//!
//! | state   | message                          | next    |
//! |---------|----------------------------------|---------|
//! | Idle    | `PointerEnter`                   | Pending |
//! | Pending | `Attach` for the current cycle   | Shown   |
//! | Shown   | `PointerEnter`                   | Shown   |
//! | Shown   | `Settled` for the current cycle  | Shown   |
//! | any     | `PointerLeave`, `Wheel`, `Click`, `Hide` | Idle |
//! | any     | `Destroy`                        | Idle, permanently |
//!
//! `Attach` and `Settled` messages from an earlier cycle are dropped, so a pointer
//! leaving before a queued attach is processed still ends up Idle.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::{Receiver, Sender, unbounded};
use hashbrown::HashMap;
use log::{debug, trace, warn};

use crate::base_types::*;
use crate::config::TooltipConfig;
use crate::event::{Cycle, HostEvent, HostEventKind, TooltipMsg};
use crate::host::*;
use crate::offset::axis_offset;
use crate::placement::{AlignmentPair, ResolvedPlacement, TextDirection, resolve};
use crate::text_tip::TextTip;

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Idle,
    /// A show was requested and the mount is queued.
    Pending,
    Shown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TooltipContent {
    /// Shown through a synthesized text element.
    Text(String),
    /// Mounted into the overlay host, with an optional custom template.
    Template(Option<TemplateId>),
}

/// Everything needed to show the tooltip, derived from the configuration and the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRequest {
    pub anchor: ElementId,
    pub placement: ResolvedPlacement,
    pub offset_px: f32,
    pub content: TooltipContent,
    pub custom_class: String,
    direction: TextDirection,
    fingerprint: u64,
}

impl TooltipRequest {
    fn build(anchor: ElementId, config: &TooltipConfig, direction: TextDirection) -> Self {
        let content = match config.plain_text() {
            Some(text) => TooltipContent::Text(text.to_string()),
            None => TooltipContent::Template(config.content_template),
        };
        Self {
            anchor,
            placement: resolve(config.side, direction),
            offset_px: config.offset_px,
            content,
            custom_class: config.custom_class.clone(),
            direction,
            fingerprint: config.fingerprint(),
        }
    }
}

/// The per-controller show state.
#[derive(Debug)]
pub struct TooltipSession {
    id: u64,
    state: TooltipState,
    cycle: Cycle,
    pointer: Option<Point>,
    from_pointer: bool,
    overlay: Option<OverlayHandle>,
    content: Option<ContentRef>,
    text_tip: Option<TextTip>,
    offset_applied: bool,
}

impl TooltipSession {
    fn new() -> Self {
        Self {
            id: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            state: TooltipState::Idle,
            cycle: 0,
            pointer: None,
            from_pointer: false,
            overlay: None,
            content: None,
            text_tip: None,
            offset_applied: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    /// The overlay, once the rich path has shown at least once. It is kept across hides.
    pub fn overlay(&self) -> Option<OverlayHandle> {
        self.overlay
    }

    /// The content currently mounted in the overlay.
    pub fn content(&self) -> Option<ContentRef> {
        self.content
    }

    /// The synthesized plain-text element, while shown.
    pub fn text_element(&self) -> Option<ElementId> {
        self.text_tip.as_ref().map(|t| t.element())
    }

    pub fn offset_applied(&self) -> bool {
        self.offset_applied
    }
}

pub struct TooltipController<P: Platform> {
    platform: P,
    anchor: ElementId,
    config: TooltipConfig,
    request: Option<TooltipRequest>,
    session: TooltipSession,
    subscriptions: HashMap<HostEventKind, ListenerId>,
    sender: Sender<TooltipMsg>,
    receiver: Receiver<TooltipMsg>,
    on_created: Option<Box<dyn FnMut(ContentRef)>>,
    destroyed: bool,
}

impl<P: Platform> TooltipController<P> {
    /// Attach a tooltip to `anchor`. Unless `show_tooltip` is off, this starts listening
    /// for the pointer entering the anchor.
    pub fn new(platform: P, anchor: ElementId, config: TooltipConfig) -> Self {
        let (sender, receiver) = unbounded();
        let mut controller = Self {
            platform,
            anchor,
            config,
            request: None,
            session: TooltipSession::new(),
            subscriptions: HashMap::new(),
            sender,
            receiver,
            on_created: None,
            destroyed: false,
        };
        if controller.config.show_tooltip {
            controller.listen(HostEventKind::MouseEnter);
        }
        controller
    }

    /// Called with the mounted content each time the overlay path attaches it.
    pub fn on_tooltip_created<F: FnMut(ContentRef) + 'static>(mut self, f: F) -> Self {
        self.on_created = Some(Box::new(f));
        self
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn anchor(&self) -> ElementId {
        self.anchor
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    pub fn session(&self) -> &TooltipSession {
        &self.session
    }

    pub fn state(&self) -> TooltipState {
        self.session.state
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// A sender for delivering messages from outside the registered listeners.
    pub fn sender(&self) -> Sender<TooltipMsg> {
        self.sender.clone()
    }

    /// Replace the configuration. A change to anything that affects the tooltip hides a
    /// shown tooltip and takes effect on the next show.
    pub fn set_config(&mut self, config: TooltipConfig) {
        if self.destroyed {
            return;
        }
        let changed = config.fingerprint() != self.config.fingerprint();
        self.config = config;
        if !changed {
            return;
        }

        debug!("Tooltip config changed on {:?}", self.anchor);
        if self.session.state != TooltipState::Idle {
            self.hide();
        }
        self.request = None;
        if self.config.show_tooltip {
            self.listen(HostEventKind::MouseEnter);
        } else {
            self.unlisten(HostEventKind::MouseEnter);
        }
    }

    /// Apply every queued message, including ones queued while processing.
    /// Returns how many were applied.
    pub fn process_events(&mut self) -> usize {
        let mut n = 0;
        while let Ok(msg) = self.receiver.try_recv() {
            self.update(msg);
            n += 1;
        }
        n
    }

    pub fn update(&mut self, msg: TooltipMsg) {
        if self.destroyed {
            debug!("Dropping {:?}: tooltip was destroyed", msg);
            return;
        }
        trace!("{:?} while {:?}", msg, self.session.state);

        match msg {
            TooltipMsg::PointerEnter { pointer } => {
                if let Some(cycle) = self.begin(pointer, true) {
                    // Receiver is owned by self, so this can't fail
                    let _ = self.sender.send(TooltipMsg::Attach(cycle));
                }
            }
            TooltipMsg::Attach(cycle) => self.attach(cycle),
            TooltipMsg::Settled(cycle, pair) => self.settled(cycle, pair),
            TooltipMsg::PointerLeave | TooltipMsg::Wheel | TooltipMsg::Click | TooltipMsg::Hide => {
                self.hide()
            }
            TooltipMsg::Destroy => self.destroy(),
        }
    }

    /// Show the tooltip now. Does nothing if it is already shown, disabled, destroyed,
    /// or if the anchor is no longer in the document.
    pub fn show(&mut self) {
        if let Some(cycle) = self.begin(None, false) {
            self.attach(cycle);
        }
    }

    /// Hide the tooltip. Safe to call in any state.
    ///
    /// The overlay handle is kept for the next show; the text element is removed outright.
    pub fn hide(&mut self) {
        for kind in HostEventKind::DISMISS {
            self.unlisten(kind);
        }

        if let Some(tip) = self.session.text_tip.take() {
            tip.remove(&mut self.platform);
        }
        if self.session.content.take().is_some()
            && let Some(overlay) = self.session.overlay
        {
            if let Some(strategy) = self.platform.position_strategy(overlay) {
                strategy.clear_position_settled();
            }
            self.platform.detach(overlay);
        }

        if self.session.state != TooltipState::Idle {
            debug!("Tooltip hidden on {:?}", self.anchor);
        }
        self.session.state = TooltipState::Idle;
        self.session.pointer = None;
    }

    /// Release everything: listeners, mounted content, the text element and the overlay.
    /// The controller is inert afterwards.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }

        self.unlisten(HostEventKind::MouseEnter);
        self.hide();

        let dom_id = TextTip::dom_id(self.session.id);
        if let Some(stale) = self.platform.get_element_by_id(&dom_id) {
            self.platform.remove(stale);
        }
        if let Some(overlay) = self.session.overlay.take() {
            self.platform.dispose(overlay);
        }

        self.destroyed = true;
        let dropped = self.receiver.try_iter().count();
        debug!(
            "Tooltip destroyed on {:?} ({} queued messages dropped)",
            self.anchor, dropped
        );
    }

    // Transitions

    /// Idle -> Pending. Returns the new cycle, or `None` if there is nothing to show.
    fn begin(&mut self, pointer: Option<Point>, from_pointer: bool) -> Option<Cycle> {
        if self.destroyed || !self.config.show_tooltip {
            return None;
        }
        if self.session.state != TooltipState::Idle {
            trace!("Show ignored while {:?}", self.session.state);
            return None;
        }
        if !self.platform.is_connected(self.anchor) {
            debug!("Not showing tooltip: {:?} is detached", self.anchor);
            return None;
        }
        if from_pointer && !self.platform.is_hovered(self.anchor) {
            trace!("Pointer already left {:?}", self.anchor);
            return None;
        }

        self.session.cycle += 1;
        self.session.state = TooltipState::Pending;
        self.session.pointer = pointer;
        self.session.from_pointer = from_pointer;
        // Listen for dismissal already, so a leave while pending isn't lost
        for kind in HostEventKind::DISMISS {
            self.listen(kind);
        }
        Some(self.session.cycle)
    }

    /// Pending -> Shown, or back to Idle if nothing could be mounted.
    fn attach(&mut self, cycle: Cycle) {
        if self.session.state != TooltipState::Pending || cycle != self.session.cycle {
            trace!("Dropping stale attach for cycle {}", cycle);
            return;
        }
        if !self.platform.is_connected(self.anchor) {
            debug!("Not showing tooltip: {:?} detached while pending", self.anchor);
            self.hide();
            return;
        }
        if self.session.from_pointer && !self.platform.is_hovered(self.anchor) {
            trace!("Pointer left {:?} while pending", self.anchor);
            self.hide();
            return;
        }

        let request = self.current_request();
        let mounted = match &request.content {
            TooltipContent::Text(text) => self.mount_text(text, &request.custom_class),
            TooltipContent::Template(template) => self.mount_rich(&request, *template),
        };

        if mounted {
            self.session.state = TooltipState::Shown;
            debug!(
                "Tooltip shown on {:?} ({:?})",
                self.anchor, request.placement.side
            );
        } else {
            self.hide();
        }
    }

    /// Apply the offset for the pair the overlay settled on. Once per cycle.
    fn settled(&mut self, cycle: Cycle, pair: AlignmentPair) {
        if cycle != self.session.cycle
            || self.session.state != TooltipState::Shown
            || self.session.offset_applied
        {
            trace!("Ignoring settle for cycle {}", cycle);
            return;
        }
        let Some(overlay) = self.session.overlay else {
            return;
        };

        let offset_px = self.current_request().offset_px;
        let offset = axis_offset(pair, offset_px);
        match self.platform.position_strategy(overlay) {
            Some(strategy) => {
                // Both axes are set so an offset left over from another side is cleared
                strategy.with_default_offset_x(offset.x);
                strategy.with_default_offset_y(offset.y);
                strategy.reapply_last_position();
            }
            None => {
                warn!("Overlay {:?} lost its position strategy", overlay);
                return;
            }
        }
        self.session.offset_applied = true;
        trace!("Applied offset {:?} for {:?}", offset, pair);

        if self.config.force_sync {
            self.platform.detect_changes();
        }
    }

    // Mounting

    fn mount_text(&mut self, text: &str, custom_class: &str) -> bool {
        if let Some(old) = self.session.text_tip.take() {
            old.remove(&mut self.platform);
        }

        let dom_id = TextTip::dom_id(self.session.id);
        let Some(tip) = TextTip::create(&mut self.platform, self.anchor, dom_id, text, custom_class)
        else {
            debug!("Not showing tooltip: {:?} has no parent", self.anchor);
            return false;
        };

        let pointer = if self.config.track_pointer {
            self.session.pointer
        } else {
            None
        };
        tip.position(&mut self.platform, self.anchor, pointer);
        self.session.text_tip = Some(tip);
        true
    }

    fn mount_rich(&mut self, request: &TooltipRequest, template: Option<TemplateId>) -> bool {
        let positions = request.placement.positions();
        let overlay = match self.session.overlay {
            Some(overlay) => overlay,
            None => {
                let overlay = self.platform.create_overlay(self.anchor, &positions);
                self.session.overlay = Some(overlay);
                overlay
            }
        };

        let cycle = self.session.cycle;
        let sender = self.sender.clone();
        match self.platform.position_strategy(overlay) {
            Some(strategy) => {
                strategy.with_positions(&positions);
                strategy.once_position_settled(Box::new(move |pair: AlignmentPair| {
                    let _ = sender.send(TooltipMsg::Settled(cycle, pair));
                }));
            }
            None => {
                warn!("Overlay {:?} has no position strategy", overlay);
                return false;
            }
        }

        let content = ContentDescriptor {
            template,
            custom_class: request.custom_class.clone(),
        };
        let content_ref = self.platform.attach(overlay, &content);
        self.session.content = Some(content_ref);
        self.session.offset_applied = false;

        if let Some(f) = self.on_created.as_mut() {
            f(content_ref);
        }
        true
    }

    // Requests and listeners

    fn current_request(&mut self) -> TooltipRequest {
        let direction = self.platform.text_direction(self.anchor);
        let fingerprint = self.config.fingerprint();
        match &self.request {
            Some(r) if r.fingerprint == fingerprint && r.direction == direction => r.clone(),
            _ => {
                let r = TooltipRequest::build(self.anchor, &self.config, direction);
                self.request = Some(r.clone());
                r
            }
        }
    }

    fn listen(&mut self, kind: HostEventKind) {
        if self.subscriptions.contains_key(&kind) {
            return;
        }
        let sender = self.sender.clone();
        let id = self.platform.listen(
            self.anchor,
            kind,
            Box::new(move |event: &HostEvent| {
                let event = HostEvent {
                    kind,
                    pointer: event.pointer,
                };
                let _ = sender.send(event.into());
            }),
        );
        self.subscriptions.insert(kind, id);
    }

    fn unlisten(&mut self, kind: HostEventKind) {
        if let Some(id) = self.subscriptions.remove(&kind) {
            self.platform.unlisten(id);
        }
    }
}

impl<P: Platform> Drop for TooltipController<P> {
    fn drop(&mut self) {
        self.destroy();
    }
}
