pub const DEFAULT_WINDOW_WIDTH: i32 = 1280;     // Initial window width
pub const DEFAULT_WINDOW_HEIGHT: i32 = 720;     // Initial window height
pub const FPS: u32 = 60;                        // Frames per second

pub const AUTOPLAY_INTERVAL_MS: u64 = 5_000;    // Time between automatic advances
pub const TRANSITION_MS: u64 = 500;             // Duration of an animated slide change
pub const BREAKPOINT: f32 = 768.0;              // Viewports at or below this width show one card
pub const SWIPE_DIVISOR: f32 = 3.0;             // A drag must exceed card width / divisor to commit

pub const CARD_GAP: f32 = 24.0;                 // Horizontal space between two cards
pub const SIDE_PADDING: f32 = 32.0;             // Space left and right of the track
pub const TRACK_TOP: f32 = 40.0;                // Top edge of the track
pub const INDICATOR_RADIUS: f32 = 6.0;          // Radius of an indicator dot
pub const INDICATOR_SPACING: f32 = 24.0;        // Distance between indicator dot centers
pub const INDICATOR_MARGIN: f32 = 36.0;         // Distance from window bottom to indicator row
