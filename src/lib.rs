//! # express_fx
//!
//! Ambient particle effects for the J3ss Express landing page: bright rail sparks
//! and slow drifting embers, advanced once per display refresh.
//!
//! ## Features
//!
//! - **Particle field**: two independently rendered populations with fixed-form physics
//! - **Pluggable randomness**: seeded or scripted random sources for deterministic tests
//! - **Surface abstraction**: canvas backend in the browser, recording backend natively
//! - **Accessibility**: the reduced-motion preference keeps the field from ever starting
//! - **Page HUD**: clock, flash notes, ambience toggle, share/copy links, contact form
//!
//! ### Example
//!
//! ```
//! use express_fx::config::FxConfig;
//! use express_fx::core::Runner;
//!
//! let mut config = FxConfig::default();
//! config.display.headless_frames = 30;
//! config.display.seed = Some(11);
//!
//! let summary = Runner::run_with(&config).unwrap();
//! assert_eq!(summary.frames, 30);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: errors, frame scheduling, logging and the headless runner
//! - [`config`]: configuration loading and validation
//! - [`platform`]: device class, reduced motion and viewport probing
//! - [`render`]: render surfaces and the particle field
//! - [`hud`]: page HUD logic

/// Errors, frame scheduling, logging and the headless runner
pub mod core;
/// Configuration system
pub mod config;
/// Environment probing
pub mod platform;
/// Render surfaces and particle effects
pub mod render;
/// Page HUD logic
pub mod hud;

/// Browser bindings
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::FxConfig;
pub use render::particles::ParticleField;
