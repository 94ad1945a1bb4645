/// Which device holds the track. Only the mouse changes the cursor.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Pointer {
    Mouse,
    Touch,
}

/// Pointer drag state of the track.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DragState {
    Idle,                                       // Nothing holds the track
    Dragging { start_x: f32, pointer: Pointer }, // Pointer went down at `start_x`
}

#[derive(Debug, PartialEq, Clone)]
pub struct CarouselState {
    pub current_index: usize,
    pub drag: DragState,
    pub visible_cards: usize,
    pub card_pixel_width: f32,
}

impl CarouselState {
    pub fn new(visible_cards: usize) -> Self {
        Self {
            current_index: 0,
            drag: DragState::Idle,
            visible_cards,
            card_pixel_width: 0.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn drag_start_x(&self) -> Option<f32> {
        match self.drag {
            DragState::Dragging { start_x, .. } => Some(start_x),
            DragState::Idle => None,
        }
    }
}
