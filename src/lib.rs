// src/lib.rs

pub mod animation;
pub mod config;
pub mod draw;
pub mod error;
pub mod models;
pub mod render;
pub mod utilities;

pub use error::{Result, SpringBallError};
