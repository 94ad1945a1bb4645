use raylib::prelude::*;

use crate::card::CardDeck;
use crate::carousel::Indicator;
use crate::constants::*;
use crate::input::contains;
use crate::layout::{CardMetrics, TrackGeometry};
use crate::track::{Track, Transition};

const TITLE_SIZE: i32 = 24;
const CONTENT_SIZE: i32 = 18;
const TEXT_PADDING: f32 = 16.0;
const IMAGE_SHARE: f32 = 0.55; // Fraction of the card height used by the image

const BACKGROUND: Color = Color::new(240, 242, 245, 255);
const CARD_FILL: Color = Color::new(255, 255, 255, 255);
const PLACEHOLDER: Color = Color::new(205, 210, 218, 255);
const TITLE_COLOR: Color = Color::new(33, 37, 41, 255);
const CONTENT_COLOR: Color = Color::new(96, 102, 110, 255);
const DOT_IDLE: Color = Color::new(190, 194, 200, 255);
const DOT_ACTIVE: Color = Color::new(51, 51, 51, 255);

/// Center of indicator dot `index` in a row of `count`, centered at the bottom of the window.
pub fn indicator_center(index: usize, count: usize, viewport_width: f32, viewport_height: f32) -> Vector2 {
    let middle = (count.max(1) - 1) as f32 * 0.5;
    Vector2::new(
        viewport_width * 0.5 + (index as f32 - middle) * INDICATOR_SPACING,
        viewport_height - INDICATOR_MARGIN,
    )
}

/// Greedy word wrap. `measure` returns the pixel width of a string.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() { word.to_string() } else { format!("{line} {word}") };
        if measure(&candidate) <= max_width || line.is_empty() {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// raylib implementation of the card track.
///
/// Offsets are eased with a cubic in-out tween, the same way slides animate
/// elsewhere; a `Transition::None` apply jumps straight to the target.
pub struct WindowTrack {
    geometry: TrackGeometry,
    viewport_height: f32,
    textures: Vec<Option<Texture2D>>, // One slot per card, None draws a placeholder

    displayed: f32,
    target: f32,
    tween: Option<ease::Tween>,
    animation_timer: f32,
    transition_duration: f32,

    grabbing: bool,
}

impl WindowTrack {
    pub fn new(
        viewport_width: f32,
        viewport_height: f32,
        side_padding: f32,
        gap: f32,
        transition_duration: f32,
        textures: Vec<Option<Texture2D>>,
    ) -> Self {
        Self {
            geometry: TrackGeometry::new(viewport_width, side_padding, gap),
            viewport_height,
            textures,
            displayed: 0.0,
            target: 0.0,
            tween: None,
            animation_timer: 0.0,
            transition_duration,
            grabbing: false,
        }
    }

    /// Follow a window resize. The carousel re-measures and re-applies the offset afterwards.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.geometry.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn viewport_width(&self) -> f32 {
        self.geometry.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn displayed_offset(&self) -> f32 {
        self.displayed
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.displayed = tween.apply(dt);
        self.animation_timer += dt;
        if self.animation_timer >= self.transition_duration {
            self.displayed = self.target;
            self.tween = None;
        }
    }

    fn card_height(&self) -> f32 {
        (self.viewport_height - TRACK_TOP - 2.0 * INDICATOR_MARGIN).max(0.0)
    }

    /// Area that accepts drags.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(0.0, TRACK_TOP, self.geometry.viewport_width, self.card_height())
    }

    /// Hand over the idle track, horizontal resize arrows while a mouse drags it.
    pub fn cursor(&self, mouse: Vector2) -> MouseCursor {
        if self.grabbing {
            MouseCursor::MOUSE_CURSOR_RESIZE_EW
        } else if contains(&self.bounds(), mouse) {
            MouseCursor::MOUSE_CURSOR_POINTING_HAND
        } else {
            MouseCursor::MOUSE_CURSOR_DEFAULT
        }
    }

    pub fn draw(
        &self,
        d: &mut RaylibDrawHandle,
        deck: &CardDeck,
        visible_cards: usize,
        indicators: impl Iterator<Item = Indicator>,
    ) {
        d.clear_background(BACKGROUND);

        let card_width = self.geometry.card_width(visible_cards);
        let card_height = self.card_height();
        let image_height = card_height * IMAGE_SHARE;

        for (position, card) in deck.cards().iter().enumerate() {
            let x = self.geometry.card_x(position, visible_cards, self.displayed);
            // Skip cards scrolled out of the window
            if x + card_width < 0.0 || x > self.geometry.viewport_width {
                continue;
            }

            let frame = Rectangle::new(x, TRACK_TOP, card_width, card_height);
            d.draw_rectangle_rounded(frame, 0.04, 8, CARD_FILL);

            let image_area = Rectangle::new(x, TRACK_TOP, card_width, image_height);
            match self.textures.get(position).and_then(Option::as_ref) {
                Some(texture) => draw_cover(d, texture, image_area),
                None => d.draw_rectangle_rec(image_area, PLACEHOLDER),
            }

            let text_x = (x + TEXT_PADDING) as i32;
            let text_width = (card_width - 2.0 * TEXT_PADDING) as i32;
            let mut y = (TRACK_TOP + image_height + TEXT_PADDING) as i32;
            d.draw_text(&card.title, text_x, y, TITLE_SIZE, TITLE_COLOR);
            y += TITLE_SIZE + 10;

            let bottom = (TRACK_TOP + card_height - TEXT_PADDING) as i32;
            for line in wrap_text(&card.content, text_width, |s| d.measure_text(s, CONTENT_SIZE)) {
                if y + CONTENT_SIZE > bottom {
                    break;
                }
                d.draw_text(&line, text_x, y, CONTENT_SIZE, CONTENT_COLOR);
                y += CONTENT_SIZE + 6;
            }
        }

        let indicators: Vec<Indicator> = indicators.collect();
        for indicator in &indicators {
            let center = indicator_center(
                indicator.index,
                indicators.len(),
                self.geometry.viewport_width,
                self.viewport_height,
            );
            let color = if indicator.active { DOT_ACTIVE } else { DOT_IDLE };
            d.draw_circle(center.x as i32, center.y as i32, INDICATOR_RADIUS, color);
        }
    }
}

/// Scale the texture to fill `area`, cropping the overflow from the center.
fn draw_cover(d: &mut RaylibDrawHandle, texture: &Texture2D, area: Rectangle) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    if tex_width <= 0.0 || tex_height <= 0.0 || area.width <= 0.0 || area.height <= 0.0 {
        return;
    }

    let scale = (area.width / tex_width).max(area.height / tex_height);
    let source_width = area.width / scale;
    let source_height = area.height / scale;
    let source = Rectangle::new(
        (tex_width - source_width) * 0.5,
        (tex_height - source_height) * 0.5,
        source_width,
        source_height,
    );

    d.draw_texture_pro(texture, source, area, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
}

impl Track for WindowTrack {
    fn measure(&self, visible_cards: usize) -> Option<CardMetrics> {
        let metrics = self.geometry.metrics(visible_cards);
        (metrics.width > 0.0).then_some(metrics)
    }

    fn apply(&mut self, offset: f32, transition: Transition) {
        self.target = offset;
        match transition {
            Transition::Animated if self.transition_duration > 0.0 => {
                self.tween = Some(ease::Tween::new(
                    ease::cubic_in_out,
                    self.displayed,
                    offset,
                    self.transition_duration,
                ));
                self.animation_timer = 0.0;
            }
            _ => {
                self.tween = None;
                self.displayed = offset;
            }
        }
    }

    fn disable_transition(&mut self) {
        // Freeze wherever the running tween got to
        self.tween = None;
        self.target = self.displayed;
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        self.grabbing = grabbing;
    }
}
