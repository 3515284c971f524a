// src/render/mod.rs

pub mod renderer;

pub use renderer::Renderer;
