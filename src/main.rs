// src/main.rs
use nannou::event::{TouchEvent, TouchPhase};
use nannou::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use springball::{config::Config, render::Renderer, Result, SpringBallError};

struct Model {
    renderer: Renderer,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, falling back to defaults
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Err(e) = init_logging(&config.logging.filter) {
        eprintln!("{}", e);
    }
    info!("springball {} starting", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        warn!("config.toml not loaded ({}), using defaults", e);
    }

    // Create window
    let window_id = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .build()
        .expect("Failed to create window");

    if config.window.fullscreen {
        if let Some(window) = app.window(window_id) {
            window.set_fullscreen(true);
        }
    }

    Model {
        renderer: Renderer::default(),
    }
}

/// RUST_LOG wins over the configured filter.
fn init_logging(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .map_err(|e| SpringBallError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| SpringBallError::Logging(e.to_string()))
}

fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.renderer.handle_tap();
    }
}

fn touch(_app: &App, model: &mut Model, event: TouchEvent) {
    if event.phase == TouchPhase::Started {
        model.renderer.handle_tap();
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    model.renderer.update(app.time);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.renderer.draw(&draw, app.window_rect());

    if let Err(e) = draw.to_frame(app, &frame) {
        error!("failed to draw frame: {:?}", e);
    }
}
