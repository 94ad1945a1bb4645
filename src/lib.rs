//! Card carousel rendered with raylib.
//!
//! The carousel core ([`carousel::Carousel`]) owns navigation, dragging,
//! autoplay and the responsive layout. It drives any [`track::Track`];
//! [`render::WindowTrack`] is the raylib one.

pub mod autoplay;
pub mod card;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod render;
pub mod state;
pub mod texture_loader;
pub mod track;

pub use card::{Card, CardDeck};
pub use carousel::{Carousel, CarouselOptions, InputEvent, Key};
pub use config::CarouselConfig;
pub use error::{CarouselError, Result};
