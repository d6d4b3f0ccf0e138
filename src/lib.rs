//! Hover tooltips for component-based UIs.
//!
//! hovertip decides *where* a tooltip goes relative to its anchor and *when* it is
//! visible. Rendering, mounting and measuring stay with the host, which provides them
//! through the traits in [`host`].
//!
//! Two rendering paths are selected by configuration:
//!
//! - With plain `text`, a small element is synthesized next to the anchor and clamped
//!   to the viewport ([`clamp_to_viewport`]).
//! - Otherwise content is mounted into an overlay with a primary and a fallback
//!   [`AlignmentPair`] ([`resolve`]), and a gap is applied once the overlay reports
//!   which of the two it used ([`axis_offset`]).
//!
//! ```ignore
//! use hovertip::{Side, TooltipConfig, TooltipController};
//!
//! let mut tooltip = TooltipController::new(
//!     platform,
//!     button,
//!     TooltipConfig::new().side(Side::Above).offset(8.0),
//! );
//! // From the host's event loop:
//! tooltip.process_events();
//! ```

#[macro_use]
mod base_types;
pub use base_types::*;

pub mod clamp;
pub use clamp::clamp_to_viewport;

pub mod config;
pub use config::TooltipConfig;

pub mod controller;
pub use controller::*;

pub mod error;
pub use error::TooltipError;

pub mod event;
pub use event::*;

pub mod host;
pub use host::*;

pub mod offset;
pub use offset::{AxisOffset, axis_offset};

pub mod placement;
pub use placement::*;

mod text_tip;
pub use text_tip::TextTip;

#[cfg(test)]
pub(crate) mod testing;
