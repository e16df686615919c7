//! Solmap - a static 3D map of the Sol system
//!
//! A library crate providing the scene geometry, configuration and render
//! plugins for testing and integration purposes.

pub mod annotation;
pub mod camera;
pub mod config;
pub mod geometry;
pub mod reference;
pub mod render;
pub mod scene;
pub mod types;
