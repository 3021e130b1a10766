//! Common utilities for physics simulations
//!
//! This crate provides shared graphics setup, a 2D camera, texture loading and
//! the error type used by the simulation binaries.

pub mod camera;
pub mod error;
pub mod graphics;
pub mod texture;

pub use camera::*;
pub use error::{Error, Result};
pub use graphics::*;
pub use texture::{Texture, Wrap};

/// Physical constants used in simulations
pub mod constants {
    /// Coulomb constant in N·m²/C²
    pub const K_COULOMB: f32 = 8.99e9;

    /// Electron rest mass in kg
    pub const ELECTRON_MASS: f32 = 9.109_383_56e-31;

    /// Metres to scaled pixel units (1 m = 1e-12 px)
    pub const PIXEL_SCALE: f32 = 1e-12;
}
