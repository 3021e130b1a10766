//! Two-Body Coulomb Interaction
//!
//! Two point charges on a line push or pull on each other through Coulomb's
//! law, slowed by linear friction and stepped with explicit Euler. The
//! binary draws them as sprites over a space backdrop with live telemetry.
//!
//! - **physics**: force law and integrator
//! - **frame_gate**: wall-clock limiter that paces simulation ticks
//! - **telemetry**: the nine readouts shown on screen
//! - **renderer** / **equations_ui**: wgpu sprites and egui text overlays

pub mod config;
pub mod equations_ui;
pub mod frame_gate;
pub mod physics;
pub mod renderer;
pub mod telemetry;

pub use config::SimConfig;
pub use frame_gate::FrameGate;
pub use physics::{InitialConditions, Parameters, Particle, Simulation};
pub use telemetry::Telemetry;
