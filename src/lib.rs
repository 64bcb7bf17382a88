//! Wave interference library - superposition of a sine wave and its
//! inverted, delayed copy

pub mod cli;
pub mod config;
pub mod error;
pub mod interference;
pub mod params;
pub mod report;
pub mod response;

pub use error::{WaveError, WaveResult};
pub use interference::{evaluate, SampleRow, SampleTable, WaveKind};
pub use response::{frequency_response, ResponsePoint};
