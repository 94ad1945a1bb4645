use crate::layout::CardMetrics;

/// How an offset change reaches the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Animated, // Ease toward the new offset
    None,     // Jump straight to it
}

impl Transition {
    pub fn from_animate(animate: bool) -> Self {
        if animate { Transition::Animated } else { Transition::None }
    }
}

/// Rendering adapter for the strip of cards.
///
/// The carousel never reads anything back from the track except its measurements,
/// so an implementation is free to draw however it likes.
pub trait Track {
    /// Rendered width of one card and the gap after it, if the track can tell yet.
    fn measure(&self, visible_cards: usize) -> Option<CardMetrics>;

    /// Move the track to `offset` pixels.
    fn apply(&mut self, offset: f32, transition: Transition);

    /// Stop any running transition where it currently is.
    fn disable_transition(&mut self);

    /// Show the grabbing cursor while a mouse holds the track.
    fn set_grabbing(&mut self, grabbing: bool);
}
