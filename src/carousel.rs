use std::time::Duration;

use tracing::{debug, info};

use crate::autoplay::{Autoplay, Interaction};
use crate::card::CardDeck;
use crate::config::CarouselConfig;
use crate::layout::{offset_for, total_slides, visible_cards_for};
use crate::state::{CarouselState, DragState, Pointer};
use crate::track::{Track, Transition};

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Platform input, already reduced to what the carousel needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp { x: f32 },
    PointerLeave,
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd { x: f32 },
    KeyDown(Key),
    Resize { viewport_width: f32 },
    IndicatorClicked(usize),
}

/// One dot of the slide indicator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    pub breakpoint: f32,
    pub swipe_divisor: f32,
    pub autoplay_interval: Duration,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::from(&CarouselConfig::default())
    }
}

impl From<&CarouselConfig> for CarouselOptions {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            breakpoint: config.breakpoint,
            swipe_divisor: config.swipe_divisor,
            autoplay_interval: config.autoplay_interval(),
        }
    }
}

/// Card carousel: navigation, dragging, autoplay and responsive layout over a [`Track`].
pub struct Carousel<T: Track> {
    deck: CardDeck,
    options: CarouselOptions,
    state: CarouselState,
    autoplay: Autoplay,
    track: Option<T>,
    mounted: bool,
}

impl<T: Track> Carousel<T> {
    /// Create the state for a viewport. Nothing moves until a track is attached and the carousel mounted.
    pub fn new(deck: CardDeck, options: CarouselOptions, viewport_width: f32) -> Self {
        let visible_cards = visible_cards_for(viewport_width, options.breakpoint);
        Self {
            deck,
            options,
            state: CarouselState::new(visible_cards),
            autoplay: Autoplay::new(options.autoplay_interval),
            track: None,
            mounted: false,
        }
    }

    pub fn attach(&mut self, track: T) {
        self.track = Some(track);
    }

    pub fn detach(&mut self) -> Option<T> {
        self.track.take()
    }

    /// Measure the track, put it on the current slide and start autoplay.
    pub fn mount(&mut self) {
        self.mounted = true;
        self.measure();
        self.go_to(self.state.current_index, false);
        self.autoplay.start();
        info!(
            cards = self.deck.len(),
            visible_cards = self.state.visible_cards,
            total_slides = self.total_slides(),
            "carousel mounted"
        );
    }

    /// Stop the timer and stop listening for input. Safe to call more than once.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.autoplay.reset();
        self.state.drag = DragState::Idle;
        self.mounted = false;
        info!("carousel unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Dispatch one input event. Ignored while unmounted.
    pub fn handle(&mut self, event: InputEvent) {
        if !self.mounted {
            return;
        }
        match event {
            InputEvent::PointerDown { x } => self.drag_start(x, Pointer::Mouse),
            InputEvent::TouchStart { x } => self.drag_start(x, Pointer::Touch),
            InputEvent::PointerMove { x } | InputEvent::TouchMove { x } => self.drag_move(x),
            InputEvent::PointerUp { x } | InputEvent::TouchEnd { x } => self.drag_end(x),
            InputEvent::PointerLeave => self.drag_leave(),
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::Resize { viewport_width } => self.resize(viewport_width),
            InputEvent::IndicatorClicked(index) => self.indicator_clicked(index),
        }
    }

    /// Advance the autoplay timer by one frame.
    pub fn tick(&mut self, dt: Duration) {
        if !self.mounted {
            return;
        }
        for _ in 0..self.autoplay.tick(dt) {
            debug!("autoplay advance");
            self.next();
        }
    }

    // --- Layout ---

    /// Cache the card pixel width (card + gap) reported by the track.
    pub fn measure(&mut self) {
        let visible_cards = self.state.visible_cards;
        if let Some(metrics) = self.track.as_ref().and_then(|track| track.measure(visible_cards)) {
            self.state.card_pixel_width = metrics.pixel_width();
        }
    }

    pub fn total_slides(&self) -> usize {
        total_slides(self.deck.len(), self.state.visible_cards)
    }

    pub fn offset(&self) -> f32 {
        self.offset_of(self.state.current_index)
    }

    fn offset_of(&self, index: usize) -> f32 {
        offset_for(index, self.state.visible_cards, self.state.card_pixel_width)
    }

    // --- Navigation ---

    /// Show slide `index` as given; callers handle wraparound.
    pub fn go_to(&mut self, index: usize, animate: bool) {
        self.state.current_index = index;
        let offset = self.offset_of(index);
        if let Some(track) = self.track.as_mut() {
            track.apply(offset, Transition::from_animate(animate));
        }
        debug!(index, offset, animate, "go to slide");
    }

    pub fn next(&mut self) {
        let current = self.state.current_index;
        let next = if current >= self.total_slides().saturating_sub(1) { 0 } else { current + 1 };
        self.go_to(next, true);
    }

    pub fn prev(&mut self) {
        let current = self.state.current_index;
        let prev = if current == 0 { self.total_slides().saturating_sub(1) } else { current - 1 };
        self.go_to(prev, true);
    }

    fn notify(&mut self, interaction: Interaction) {
        self.autoplay.on_interaction(interaction);
    }

    pub fn indicator_clicked(&mut self, index: usize) {
        if index >= self.total_slides() {
            return;
        }
        self.go_to(index, true);
        self.notify(Interaction::UserNavigated);
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => return,
        }
        self.notify(Interaction::UserNavigated);
    }

    // --- Responsive ---

    /// Re-layout for a new viewport width. The offset is only re-applied when the layout changed,
    /// so a height-only resize leaves a running transition alone.
    pub fn resize(&mut self, viewport_width: f32) {
        let before = (self.state.visible_cards, self.state.card_pixel_width);
        self.state.visible_cards = visible_cards_for(viewport_width, self.options.breakpoint);
        self.measure();
        let last = self.total_slides().saturating_sub(1);
        let index = self.state.current_index.min(last);
        if before == (self.state.visible_cards, self.state.card_pixel_width) && index == self.state.current_index {
            return;
        }
        debug!(
            viewport_width,
            visible_cards = self.state.visible_cards,
            card_pixel_width = self.state.card_pixel_width,
            index,
            "resized"
        );
        self.go_to(index, false);
    }

    // --- Dragging ---

    pub fn drag_start(&mut self, x: f32, pointer: Pointer) {
        self.state.drag = DragState::Dragging { start_x: x, pointer };
        if let Some(track) = self.track.as_mut() {
            track.disable_transition();
            if pointer == Pointer::Mouse {
                track.set_grabbing(true);
            }
        }
        self.notify(Interaction::DragStarted);
        debug!(x, ?pointer, "drag started");
    }

    /// Live preview of the drag: current slide offset plus pointer travel.
    pub fn drag_move(&mut self, x: f32) {
        let Some(start_x) = self.state.drag_start_x() else {
            return;
        };
        let offset = self.offset() + (x - start_x);
        if let Some(track) = self.track.as_mut() {
            track.apply(offset, Transition::None);
        }
    }

    /// Commit to a neighbour when the drag travelled far enough, otherwise snap back.
    pub fn drag_end(&mut self, x: f32) {
        let Some(start_x) = self.end_drag() else {
            return;
        };
        let delta = x - start_x;
        let threshold = self.state.card_pixel_width / self.options.swipe_divisor;
        if delta.abs() > threshold {
            if delta > 0.0 {
                self.prev();
            } else {
                self.next();
            }
        } else {
            self.go_to(self.state.current_index, true);
        }
        debug!(delta, threshold, index = self.state.current_index, "drag released");
        self.notify(Interaction::DragEnded);
    }

    /// Pointer left the track mid-drag: snap back to the current slide.
    pub fn drag_leave(&mut self) {
        if self.end_drag().is_none() {
            return;
        }
        self.go_to(self.state.current_index, true);
        debug!("drag left the track");
        self.notify(Interaction::DragEnded);
    }

    fn end_drag(&mut self) -> Option<f32> {
        let DragState::Dragging { start_x, pointer } = self.state.drag else {
            return None;
        };
        self.state.drag = DragState::Idle;
        if pointer == Pointer::Mouse {
            if let Some(track) = self.track.as_mut() {
                track.set_grabbing(false);
            }
        }
        Some(start_x)
    }

    // --- Accessors ---

    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        let current = self.state.current_index;
        (0..self.total_slides()).map(move |index| Indicator { index, active: index == current })
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn visible_cards(&self) -> usize {
        self.state.visible_cards
    }

    pub fn card_pixel_width(&self) -> f32 {
        self.state.card_pixel_width
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn track(&self) -> Option<&T> {
        self.track.as_ref()
    }

    pub fn track_mut(&mut self) -> Option<&mut T> {
        self.track.as_mut()
    }
}

impl<T: Track> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CardMetrics;

    struct FixedTrack(f32);

    impl Track for FixedTrack {
        fn measure(&self, _visible_cards: usize) -> Option<CardMetrics> {
            Some(CardMetrics { width: self.0, gap: 0.0 })
        }
        fn apply(&mut self, _offset: f32, _transition: Transition) {}
        fn disable_transition(&mut self) {}
        fn set_grabbing(&mut self, _grabbing: bool) {}
    }

    #[test]
    fn navigation_without_track_only_moves_the_index() {
        let mut carousel: Carousel<FixedTrack> =
            Carousel::new(CardDeck::demo(), CarouselOptions::default(), 1024.0);
        carousel.mount();
        carousel.next();
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.card_pixel_width(), 0.0);
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn events_are_ignored_until_mounted() {
        let mut carousel = Carousel::new(CardDeck::demo(), CarouselOptions::default(), 1024.0);
        carousel.attach(FixedTrack(300.0));
        carousel.handle(InputEvent::KeyDown(Key::ArrowRight));
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.autoplay().is_running());
    }

    #[test]
    fn unmount_stops_autoplay_and_input() {
        let mut carousel = Carousel::new(CardDeck::demo(), CarouselOptions::default(), 1024.0);
        carousel.attach(FixedTrack(300.0));
        carousel.mount();
        assert!(carousel.autoplay().is_running());

        carousel.unmount();
        assert!(!carousel.autoplay().is_running());
        carousel.handle(InputEvent::KeyDown(Key::ArrowRight));
        carousel.tick(Duration::from_secs(30));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut carousel = Carousel::new(CardDeck::demo(), CarouselOptions::default(), 1024.0);
        carousel.attach(FixedTrack(300.0));
        carousel.mount();
        carousel.tick(Duration::from_secs(3));
        carousel.handle(InputEvent::KeyDown(Key::Other));
        carousel.tick(Duration::from_secs(2));
        assert_eq!(carousel.current_index(), 1);
    }
}
