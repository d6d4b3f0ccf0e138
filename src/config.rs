use std::hash::{Hash, Hasher};

use ahash::AHasher;
use serde::{Deserialize, Serialize};

use crate::host::TemplateId;
use crate::placement::RequestedSide;

/// Tooltip options. Every field has a default, so partial configurations deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// When false, no pointer listener is registered and the tooltip never shows.
    pub show_tooltip: bool,
    /// Plain text. When non-empty the tooltip is a synthesized text element rather than overlay content.
    pub text: Option<String>,
    pub content_template: Option<TemplateId>,
    pub custom_class: String,
    /// Gap between the anchor and the tooltip, in pixels.
    pub offset_px: f32,
    pub side: RequestedSide,
    /// Accepted for compatibility. The lifecycle shows immediately and never reads this.
    pub show_delay_ms: u64,
    /// Run the host's change detection right after the offset is applied.
    pub force_sync: bool,
    /// Position plain-text tooltips at the pointer rather than under the anchor.
    pub track_pointer: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            show_tooltip: true,
            text: None,
            content_template: None,
            custom_class: String::new(),
            offset_px: 5.0,
            side: RequestedSide::default(),
            show_delay_ms: 600,
            force_sync: false,
            track_pointer: false,
        }
    }
}

impl TooltipConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn template(mut self, template: TemplateId) -> Self {
        self.content_template = Some(template);
        self
    }

    pub fn custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = class.into();
        self
    }

    pub fn offset(mut self, px: f32) -> Self {
        self.offset_px = px;
        self
    }

    pub fn side(mut self, side: impl Into<RequestedSide>) -> Self {
        self.side = side.into();
        self
    }

    pub fn show_tooltip(mut self, show: bool) -> Self {
        self.show_tooltip = show;
        self
    }

    pub fn force_sync(mut self, force: bool) -> Self {
        self.force_sync = force;
        self
    }

    pub fn track_pointer(mut self, track: bool) -> Self {
        self.track_pointer = track;
        self
    }

    /// The plain text to show, if any. Empty text counts as none.
    pub fn plain_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// A stable hash of the options that affect what gets shown and where.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = AHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Hash for TooltipConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.show_tooltip.hash(state);
        self.text.hash(state);
        self.content_template.hash(state);
        self.custom_class.hash(state);
        self.offset_px.to_bits().hash(state);
        self.side.hash(state);
        self.force_sync.hash(state);
        self.track_pointer.hash(state);
        // show_delay_ms is never read, so changing it doesn't invalidate anything
    }
}
