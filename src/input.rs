use raylib::prelude::*;

use crate::carousel::{InputEvent, Key};
use crate::constants::INDICATOR_RADIUS;

/// Everything the carousel cares about from one frame of raylib input.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub resized: Option<Vector2>,
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub mouse: Vector2,
    pub mouse_pressed: bool,
    pub mouse_released: bool,
    pub touch: Option<Vector2>, // First touch point, if any finger is down
}

impl FrameInput {
    pub fn capture(rl: &RaylibHandle) -> Self {
        let resized = rl
            .is_window_resized()
            .then(|| Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32));
        let touch = (rl.get_touch_point_count() > 0).then(|| rl.get_touch_position(0));
        Self {
            resized,
            left_pressed: rl.is_key_pressed(KeyboardKey::KEY_LEFT),
            right_pressed: rl.is_key_pressed(KeyboardKey::KEY_RIGHT),
            mouse: rl.get_mouse_position(),
            mouse_pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            mouse_released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
            touch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TouchPhase {
    Up,
    Dragging { x: f32 },
    Ignored, // Finger went down outside the track
}

/// Point-in-rectangle test, edges included.
pub fn contains(area: &Rectangle, point: Vector2) -> bool {
    point.x >= area.x && point.x <= area.x + area.width && point.y >= area.y && point.y <= area.y + area.height
}

fn hit_dot(dots: &[Vector2], point: Vector2) -> Option<usize> {
    // Twice the radius so the dots are easy to hit
    let reach = INDICATOR_RADIUS * 2.0;
    dots.iter().position(|dot| {
        let dx = dot.x - point.x;
        let dy = dot.y - point.y;
        dx * dx + dy * dy <= reach * reach
    })
}

/// Turns per-frame input snapshots into carousel events.
#[derive(Debug, Clone)]
pub struct InputTracker {
    mouse_dragging: bool,
    last_mouse_x: f32,
    touch: TouchPhase,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self {
            mouse_dragging: false,
            last_mouse_x: 0.0,
            touch: TouchPhase::Up,
        }
    }
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `track` is the draggable area, `dots` the indicator centers in slide order.
    pub fn translate(&mut self, frame: &FrameInput, track: Rectangle, dots: &[Vector2]) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some(size) = frame.resized {
            events.push(InputEvent::Resize { viewport_width: size.x });
        }
        if frame.left_pressed {
            events.push(InputEvent::KeyDown(Key::ArrowLeft));
        }
        if frame.right_pressed {
            events.push(InputEvent::KeyDown(Key::ArrowRight));
        }

        // Platforms that emulate the mouse from touches would otherwise report every gesture twice
        if frame.touch.is_some() || self.touch != TouchPhase::Up {
            self.translate_touch(frame.touch, track, dots, &mut events);
            return events;
        }

        self.translate_mouse(frame, track, dots, &mut events);
        events
    }

    fn translate_touch(
        &mut self,
        touch: Option<Vector2>,
        track: Rectangle,
        dots: &[Vector2],
        events: &mut Vec<InputEvent>,
    ) {
        self.touch = match (self.touch, touch) {
            (TouchPhase::Up, Some(point)) => {
                if let Some(index) = hit_dot(dots, point) {
                    events.push(InputEvent::IndicatorClicked(index));
                    TouchPhase::Ignored
                } else if contains(&track, point) {
                    events.push(InputEvent::TouchStart { x: point.x });
                    TouchPhase::Dragging { x: point.x }
                } else {
                    TouchPhase::Ignored
                }
            }
            (TouchPhase::Dragging { x }, Some(point)) => {
                if point.x != x {
                    events.push(InputEvent::TouchMove { x: point.x });
                }
                TouchPhase::Dragging { x: point.x }
            }
            (TouchPhase::Dragging { x }, None) => {
                // Release where the finger was last seen
                events.push(InputEvent::TouchEnd { x });
                TouchPhase::Up
            }
            (TouchPhase::Ignored, Some(_)) => TouchPhase::Ignored,
            (_, None) => TouchPhase::Up,
        };
    }

    fn translate_mouse(&mut self, frame: &FrameInput, track: Rectangle, dots: &[Vector2], events: &mut Vec<InputEvent>) {
        let x = frame.mouse.x;
        if frame.mouse_pressed {
            if let Some(index) = hit_dot(dots, frame.mouse) {
                events.push(InputEvent::IndicatorClicked(index));
            } else if contains(&track, frame.mouse) {
                events.push(InputEvent::PointerDown { x });
                self.mouse_dragging = true;
            }
        } else if self.mouse_dragging {
            if !contains(&track, frame.mouse) {
                events.push(InputEvent::PointerLeave);
                self.mouse_dragging = false;
            } else if frame.mouse_released {
                events.push(InputEvent::PointerUp { x });
                self.mouse_dragging = false;
            } else if x != self.last_mouse_x {
                events.push(InputEvent::PointerMove { x });
            }
        }
        self.last_mouse_x = x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_frame() -> FrameInput {
        FrameInput {
            resized: None,
            left_pressed: false,
            right_pressed: false,
            mouse: Vector2::new(500.0, 200.0),
            mouse_pressed: false,
            mouse_released: false,
            touch: None,
        }
    }

    fn track() -> Rectangle {
        Rectangle::new(0.0, 40.0, 1000.0, 400.0)
    }

    fn dots() -> Vec<Vector2> {
        vec![Vector2::new(488.0, 600.0), Vector2::new(512.0, 600.0)]
    }

    #[test]
    fn idle_frame_produces_nothing() {
        let mut tracker = InputTracker::new();
        assert!(tracker.translate(&idle_frame(), track(), &dots()).is_empty());
    }

    #[test]
    fn resize_and_keys_come_first() {
        let mut tracker = InputTracker::new();
        let frame = FrameInput {
            resized: Some(Vector2::new(700.0, 500.0)),
            left_pressed: true,
            right_pressed: true,
            ..idle_frame()
        };
        assert_eq!(
            tracker.translate(&frame, track(), &dots()),
            vec![
                InputEvent::Resize { viewport_width: 700.0 },
                InputEvent::KeyDown(Key::ArrowLeft),
                InputEvent::KeyDown(Key::ArrowRight),
            ]
        );
    }

    #[test]
    fn mouse_drag_sequence() {
        let mut tracker = InputTracker::new();
        let press = FrameInput { mouse_pressed: true, ..idle_frame() };
        assert_eq!(tracker.translate(&press, track(), &dots()), vec![InputEvent::PointerDown { x: 500.0 }]);

        let still = idle_frame();
        assert!(tracker.translate(&still, track(), &dots()).is_empty());

        let moved = FrameInput { mouse: Vector2::new(380.0, 200.0), ..idle_frame() };
        assert_eq!(tracker.translate(&moved, track(), &dots()), vec![InputEvent::PointerMove { x: 380.0 }]);

        let release = FrameInput { mouse: Vector2::new(300.0, 200.0), mouse_released: true, ..idle_frame() };
        assert_eq!(tracker.translate(&release, track(), &dots()), vec![InputEvent::PointerUp { x: 300.0 }]);

        assert!(tracker.translate(&moved, track(), &dots()).is_empty());
    }

    #[test]
    fn leaving_the_track_ends_the_drag() {
        let mut tracker = InputTracker::new();
        tracker.translate(&FrameInput { mouse_pressed: true, ..idle_frame() }, track(), &dots());
        let outside = FrameInput { mouse: Vector2::new(500.0, 10.0), ..idle_frame() };
        assert_eq!(tracker.translate(&outside, track(), &dots()), vec![InputEvent::PointerLeave]);
        let release = FrameInput { mouse_released: true, ..outside };
        assert!(tracker.translate(&release, track(), &dots()).is_empty());
    }

    #[test]
    fn press_outside_track_is_ignored() {
        let mut tracker = InputTracker::new();
        let frame = FrameInput { mouse: Vector2::new(500.0, 10.0), mouse_pressed: true, ..idle_frame() };
        assert!(tracker.translate(&frame, track(), &dots()).is_empty());
    }

    #[test]
    fn clicking_a_dot() {
        let mut tracker = InputTracker::new();
        let frame = FrameInput { mouse: Vector2::new(513.0, 602.0), mouse_pressed: true, ..idle_frame() };
        assert_eq!(tracker.translate(&frame, track(), &dots()), vec![InputEvent::IndicatorClicked(1)]);
    }

    #[test]
    fn touch_drag_sequence() {
        let mut tracker = InputTracker::new();
        let down = FrameInput { touch: Some(Vector2::new(600.0, 100.0)), ..idle_frame() };
        assert_eq!(tracker.translate(&down, track(), &dots()), vec![InputEvent::TouchStart { x: 600.0 }]);

        let moved = FrameInput { touch: Some(Vector2::new(450.0, 100.0)), ..idle_frame() };
        assert_eq!(tracker.translate(&moved, track(), &dots()), vec![InputEvent::TouchMove { x: 450.0 }]);

        // Emulated mouse release on lift must not add a PointerUp
        let lifted = FrameInput { mouse_released: true, ..idle_frame() };
        assert_eq!(tracker.translate(&lifted, track(), &dots()), vec![InputEvent::TouchEnd { x: 450.0 }]);
    }

    #[test]
    fn tapping_a_dot_fires_once() {
        let mut tracker = InputTracker::new();
        let tap = FrameInput { touch: Some(Vector2::new(488.0, 600.0)), ..idle_frame() };
        assert_eq!(tracker.translate(&tap, track(), &dots()), vec![InputEvent::IndicatorClicked(0)]);
        assert!(tracker.translate(&tap, track(), &dots()).is_empty());
        assert!(tracker.translate(&idle_frame(), track(), &dots()).is_empty());
    }
}
