//! Accessibility projection of the bearing.
//!
//! The widget never talks to a platform accessibility stack. It hands out
//! [`AccessibilityEvent`] values and calls registered observers; hosts bridge
//! those to whatever screen reader API they run on.

/// Notification emitted when the announced value of the widget changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessibilityEvent {
    /// The widget's text representation changed to `text`.
    TextChanged { text: String },
}

impl AccessibilityEvent {
    #[inline]
    pub fn text(&self) -> &str {
        match self {
            AccessibilityEvent::TextChanged { text } => text,
        }
    }
}

/// Callback registered through
/// [`CompassView::on_accessibility`](crate::compass::CompassView::on_accessibility).
pub type AccessibilityObserver = Box<dyn FnMut(&AccessibilityEvent)>;

/// Plain decimal form of `bearing`: no unit, no rounding beyond the default
/// float formatting.
#[inline]
pub fn bearing_text(bearing: f32) -> String {
    bearing.to_string()
}
