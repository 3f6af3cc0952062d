//! Pacing crate: reveals fetched data on a fixed cadence.
//!
//! The API answers each feed in one shot. To present it as a live feed the
//! batch is replayed one item per tick:
//!
//! ```text
//! fetch ──Vec<T>──► ReplayStream ──T every period──► sink
//! ```
//!
//! - [`ticker`]: the periodic timer shared by every paced component
//! - [`replay`]: [`ReplayStream`], a finite `Stream` gated by a ticker
//! - [`blink`]: [`MarkerBlink`], the two-state map marker toggle
//!
//! # Usage
//!
//! ```ignore
//! use futures::StreamExt;
//! use pacing::replay;
//!
//! let mut news = replay(items, Duration::from_millis(1800));
//! while let Some(item) = news.next().await {
//!     sink.append_log(LogTarget::News, format_news(&item));
//! }
//! ```

pub mod blink;
pub mod replay;
pub mod ticker;

pub use blink::{MarkerAction, MarkerBlink, MarkerState};
pub use replay::{ReplayStream, replay};
pub use ticker::periodic;
