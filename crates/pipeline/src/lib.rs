//! Pipeline crate: wires the remote API to the dashboard.
//!
//! Each data path is an independent task:
//!
//! ```text
//! overall ──► aggregate ──► set_series ×5, set_composition
//! region  ──► rank      ──► set_table
//! news    ──► replay    ──► append_log(News)     one item / 1.8 s
//! rumors  ──► replay    ──► append_log(Rumors)   one item / 3.1 s
//! clock   ──────────────► set_clock              every 1 s
//! markers ──► blink     ──► add_marker / clear   every 1.5 s
//! ```
//!
//! A failed fetch is logged and ends only its own path; the other widgets
//! keep updating.

pub mod config;
pub mod format;
pub mod pipeline;

pub use config::PipelineConfig;
pub use pipeline::Pipeline;
