//! Ingest crate: turns the remote API into chart- and table-ready data.
//!
//! This crate provides:
//! - **Fetching**: one GET per dataset, envelope decoding, typed results
//! - **Aggregation**: raw snapshot history collapsed to one point per day
//! - **Ranking**: region snapshots ordered by confirmed cases
//! - **Composition**: dead/cured/active shares of the latest snapshot
//!
//! # Architecture
//!
//! ```text
//! Transport ──body──► Fetcher ──Vec<T>──┬──► aggregate() ──► DailySeriesSet
//!                                       ├──► rank()      ──► Vec<RankedRow>
//!                                       └──► (feeds handed to pacing)
//! ```
//!
//! The [`Transport`] trait is the only I/O seam, so everything above it can
//! be tested with canned bodies.

pub mod aggregate;
pub mod composition;
pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod rank;
pub mod transport;

pub use aggregate::{aggregate, aggregate_in, calendar_day, day_label};
pub use composition::composition;
pub use endpoint::{DEFAULT_API_BASE, Endpoint};
pub use error::{FetchError, TransportError};
pub use fetch::{Fetcher, decode_envelope};
pub use rank::{TABLE_HEADERS, rank};
pub use transport::{HttpTransport, Transport};
