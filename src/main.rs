use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info, warn};

use carousel::input::{FrameInput, InputTracker};
use carousel::render::{WindowTrack, indicator_center};
use carousel::texture_loader::{is_local_image, load_card_texture};
use carousel::{CardDeck, Carousel, CarouselConfig, CarouselOptions};

#[derive(Parser, Debug)]
#[command(version, about = "Card carousel with drag, keyboard and autoplay navigation")]
struct Args {
    /// TOML file with `[[cards]]` tables. The built-in news cards are shown when omitted.
    #[arg(long)]
    cards: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time between automatic advances, in milliseconds
    #[arg(long)]
    autoplay_ms: Option<u64>,

    /// Viewports at or below this width show a single card
    #[arg(long)]
    breakpoint: Option<f32>,

    /// Initial window width
    #[arg(long)]
    width: Option<i32>,

    /// Initial window height
    #[arg(long)]
    height: Option<i32>,
}

fn load_config(args: &Args) -> Result<CarouselConfig> {
    let mut config = match &args.config {
        Some(path) => CarouselConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => CarouselConfig::default(),
    };
    if let Some(ms) = args.autoplay_ms {
        config.autoplay_interval_ms = ms;
    }
    if let Some(breakpoint) = args.breakpoint {
        config.breakpoint = breakpoint;
    }
    if let Some(width) = args.width {
        config.window_width = width;
    }
    if let Some(height) = args.height {
        config.window_height = height;
    }
    config.validate().context("invalid command line overrides")?;
    Ok(config)
}

fn load_deck(args: &Args) -> Result<CardDeck> {
    match &args.cards {
        Some(path) => CardDeck::load(path).with_context(|| format!("failed to load cards from {}", path.display())),
        None => Ok(CardDeck::demo()),
    }
}

fn main() -> Result<()> {
    carousel::logging::init();

    let args = Args::parse();
    info!("Starting carousel v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args).inspect_err(|e| error!("{e:#}"))?;
    let deck = load_deck(&args).inspect_err(|e| error!("{e:#}"))?;
    info!(cards = deck.len(), "card deck ready");

    let (mut rl, thread) = raylib::init()
        .size(config.window_width, config.window_height)
        .title("Card Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Card Images ---
    let mut textures = Vec::with_capacity(deck.len());
    for card in deck.cards() {
        if !is_local_image(&card.image) {
            warn!(card = card.id, image = %card.image, "image is not a local file, using placeholder");
            textures.push(None);
            continue;
        }
        match load_card_texture(&mut rl, &thread, &card.image) {
            Ok(texture) => textures.push(Some(texture)),
            Err(e) => {
                warn!(card = card.id, "{e:#}, using placeholder");
                textures.push(None);
            }
        }
    }

    let viewport_width = rl.get_screen_width() as f32;
    let viewport_height = rl.get_screen_height() as f32;
    let track = WindowTrack::new(
        viewport_width,
        viewport_height,
        config.side_padding,
        config.card_gap,
        config.transition().as_secs_f32(),
        textures,
    );

    let mut carousel = Carousel::new(deck, CarouselOptions::from(&config), viewport_width);
    carousel.attach(track);
    carousel.mount();

    let mut input = InputTracker::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // --- Input ---
        let frame = FrameInput::capture(&rl);
        let Some(track) = carousel.track_mut() else {
            break;
        };
        if let Some(size) = frame.resized {
            track.set_viewport(size.x, size.y);
        }
        let bounds = track.bounds();
        let (width, height) = (track.viewport_width(), track.viewport_height());
        let total = carousel.total_slides();
        let dots: Vec<Vector2> = (0..total).map(|i| indicator_center(i, total, width, height)).collect();

        for event in input.translate(&frame, bounds, &dots) {
            carousel.handle(event);
        }

        // --- Update ---
        carousel.tick(Duration::from_secs_f32(dt));
        if let Some(track) = carousel.track_mut() {
            track.update(dt);
            rl.set_mouse_cursor(track.cursor(frame.mouse));
        }

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        if let Some(track) = carousel.track() {
            track.draw(&mut d, carousel.deck(), carousel.visible_cards(), carousel.indicators());
        }
    }

    carousel.unmount();
    Ok(())
}
