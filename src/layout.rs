/// Rendered size of one card and the space after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    pub width: f32,
    pub gap: f32,
}

impl CardMetrics {
    /// Distance between the left edges of two neighbouring cards.
    pub fn pixel_width(&self) -> f32 {
        self.width + self.gap
    }
}

/// Number of cards shown side by side for a viewport.
pub fn visible_cards_for(viewport_width: f32, breakpoint: f32) -> usize {
    if viewport_width <= breakpoint { 1 } else { 2 }
}

pub fn total_slides(card_count: usize, visible_cards: usize) -> usize {
    card_count.div_ceil(visible_cards.max(1))
}

/// Horizontal translation of the track that reveals slide `index`.
pub fn offset_for(index: usize, visible_cards: usize, card_pixel_width: f32) -> f32 {
    -(index as f32) * card_pixel_width * visible_cards as f32
}

/// Where the track sits inside a viewport and how wide its cards are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub viewport_width: f32,
    pub side_padding: f32,
    pub gap: f32,
}

impl TrackGeometry {
    pub fn new(viewport_width: f32, side_padding: f32, gap: f32) -> Self {
        Self { viewport_width, side_padding, gap }
    }

    pub fn inner_width(&self) -> f32 {
        (self.viewport_width - 2.0 * self.side_padding).max(0.0)
    }

    /// Cards share the inner width evenly, with one gap between each pair.
    pub fn card_width(&self, visible_cards: usize) -> f32 {
        let visible = visible_cards.max(1) as f32;
        ((self.inner_width() - self.gap * (visible - 1.0)) / visible).max(0.0)
    }

    pub fn metrics(&self, visible_cards: usize) -> CardMetrics {
        CardMetrics {
            width: self.card_width(visible_cards),
            gap: self.gap,
        }
    }

    /// Left edge of card `position` in the viewport for a given track offset.
    pub fn card_x(&self, position: usize, visible_cards: usize, offset: f32) -> f32 {
        self.side_padding + offset + position as f32 * self.metrics(visible_cards).pixel_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(visible_cards_for(768.0, 768.0), 1);
        assert_eq!(visible_cards_for(320.0, 768.0), 1);
        assert_eq!(visible_cards_for(769.0, 768.0), 2);
    }

    #[test]
    fn total_slides_rounds_up() {
        assert_eq!(total_slides(4, 2), 2);
        assert_eq!(total_slides(4, 1), 4);
        assert_eq!(total_slides(5, 2), 3);
        assert_eq!(total_slides(1, 2), 1);
    }

    #[test]
    fn offset_moves_a_whole_slide() {
        assert_eq!(offset_for(0, 2, 300.0), 0.0);
        assert_eq!(offset_for(1, 2, 300.0), -600.0);
        assert_eq!(offset_for(3, 1, 250.0), -750.0);
    }

    #[test]
    fn unmeasured_track_stays_put() {
        assert_eq!(offset_for(2, 2, 0.0), 0.0);
    }

    #[test]
    fn geometry_splits_inner_width() {
        let geometry = TrackGeometry::new(1064.0, 20.0, 24.0);
        assert_eq!(geometry.inner_width(), 1024.0);
        assert_eq!(geometry.card_width(1), 1024.0);
        assert_eq!(geometry.card_width(2), 500.0);
        assert_eq!(geometry.metrics(2).pixel_width(), 524.0);
        assert_eq!(geometry.card_x(1, 2, -524.0), 20.0);
    }

    #[test]
    fn tiny_viewport_never_goes_negative() {
        let geometry = TrackGeometry::new(10.0, 32.0, 24.0);
        assert_eq!(geometry.card_width(2), 0.0);
    }
}
