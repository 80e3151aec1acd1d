//! hinanai: interactive line diagram
//!
//! Four track segments drawn through a pan/zoom camera with a frame rate
//! overlay. A/Q change the zoom, arrow keys pan.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod actors;
mod app;
mod camera;
mod config;
mod font;
mod input;
mod line_diagram;
mod logging;
mod render;
mod stage;

use macroquad::prelude::*;
use app::HinanaiGame;
use render::MacroquadCanvas;
use stage::Frame;

fn window_conf() -> Conf {
    logging::init();
    let window = &config::get().window;
    Conf {
        window_title: format!("{} v{}", window.title, VERSION),
        window_width: window.width,
        window_height: window.height,
        window_resizable: true,
        high_dpi: window.high_dpi,
        ..Default::default()
    }
}

fn window_size() -> (u32, u32) {
    (screen_width().max(0.0) as u32, screen_height().max(0.0) as u32)
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    // Intercept window close so resources are released before exit
    prevent_quit();

    let (width, height) = window_size();
    let mut game = match HinanaiGame::create(config::get(), width, height).await {
        Ok(game) => game,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("=== hinanai v{} ===", VERSION);

    let mut last_size = (width, height);
    loop {
        if is_quit_requested() {
            break;
        }

        let size = window_size();
        if size != last_size {
            game.resize(size.0, size.1);
            last_size = size;
        }

        let frame = Frame {
            delta: get_frame_time(),
            fps: get_fps().max(0) as u32,
            actions: input::poll_actions(),
        };
        let mut canvas = MacroquadCanvas::new();
        game.render(&frame, &mut canvas);

        next_frame().await;
    }

    game.dispose();
}
