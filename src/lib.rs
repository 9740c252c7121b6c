//! orbitviz library - audio-reactive spectrum bars and an orbit/follow camera
//!
//! The numeric core (vector math, spectrum smoothing, camera state) is pure
//! and single-threaded; `audio` holds the host-side FFT thread and handoff.

pub mod audio;
pub mod camera;
pub mod cli;
pub mod error;
pub mod math;
pub mod params;
pub mod scene;
pub mod spectrum;
