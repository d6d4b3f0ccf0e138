use core::fmt;

use crate::base_types::*;
use crate::placement::AlignmentPair;

/// Host element events the tooltip listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEventKind {
    MouseEnter,
    MouseLeave,
    MouseWheel,
    Click,
}

impl HostEventKind {
    /// Events that dismiss a shown tooltip.
    pub const DISMISS: [HostEventKind; 3] = [
        HostEventKind::MouseWheel,
        HostEventKind::MouseLeave,
        HostEventKind::Click,
    ];

    /// The host's name for this event.
    pub fn name(self) -> &'static str {
        match self {
            HostEventKind::MouseEnter => "mouseenter",
            HostEventKind::MouseLeave => "mouseleave",
            HostEventKind::MouseWheel => "mousewheel",
            HostEventKind::Click => "click",
        }
    }
}

impl fmt::Display for HostEventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a listener callback receives from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostEvent {
    pub kind: HostEventKind,
    /// Pointer position in viewport coordinates, when the host knows it.
    pub pointer: Option<Point>,
}

impl HostEvent {
    pub fn new(kind: HostEventKind) -> Self {
        Self {
            kind,
            pointer: None,
        }
    }

    pub fn at(kind: HostEventKind, pointer: Point) -> Self {
        Self {
            kind,
            pointer: Some(pointer),
        }
    }
}

/// Identifies one show cycle, so late deliveries from a previous cycle can be told apart.
pub type Cycle = u64;

/// Messages that drive the tooltip controller. Listener callbacks never touch the
/// controller directly; they only send one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipMsg {
    PointerEnter { pointer: Option<Point> },
    PointerLeave,
    Wheel,
    Click,
    /// Mount the tooltip for the given cycle.
    Attach(Cycle),
    /// The overlay host settled on `pair` for the given cycle.
    Settled(Cycle, AlignmentPair),
    Hide,
    Destroy,
}

impl From<HostEvent> for TooltipMsg {
    fn from(event: HostEvent) -> Self {
        match event.kind {
            HostEventKind::MouseEnter => TooltipMsg::PointerEnter {
                pointer: event.pointer,
            },
            HostEventKind::MouseLeave => TooltipMsg::PointerLeave,
            HostEventKind::MouseWheel => TooltipMsg::Wheel,
            HostEventKind::Click => TooltipMsg::Click,
        }
    }
}
