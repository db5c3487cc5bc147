//! Control logic for a two-button bathroom scale.
//!
//! This library holds everything that does not touch a register: the
//! state machine, the seven-segment glyph table, the sample conversion and
//! the main-loop orchestration. It runs unchanged on the host for tests.
//!
//! Usage: `cargo test` (host) or `cargo run --release --features embedded`
//! (nRF52840 via probe-rs).
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and binds these types to GPIO, GPIOTE and the SAADC.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod controller;
pub mod error;
pub mod power_logic;
pub mod sampler;
pub mod scale;
pub mod ui;

pub use controller::{Controller, DeviceState, TargetOffset, Transition};
pub use error::Error;
pub use scale::{AnalogSource, EventSource, PowerControl, Scale, StepReport};
pub use ui::ButtonEvent;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
