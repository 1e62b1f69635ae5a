//! Core library for the Sort Visualiser application.
//!
//! The crate implements an instrumented sorting engine: six classic sorting
//! algorithms re-expressed as lazy streams of observable steps. A caller
//! hands a [`SortRun`] exclusive access to an array and pulls one
//! [`StepEvent`] at a time; the array mutates in place as a side effect of
//! pulling, so after consuming N events it is in exactly the state the
//! algorithm had reached. Rendering, pacing, and input generation live in
//! the application crate, which only consumes this stream.

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod strategy;

pub use config::{AppConfig, InputConfig, PlaybackConfig};
pub use engine::{RunSummary, SortRun};
pub use error::{Result, SortVizError};
pub use event::{Indices, StepEvent, StepKind};
pub use strategy::Strategy;
