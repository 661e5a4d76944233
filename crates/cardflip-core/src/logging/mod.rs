//! Diagnostics for Card Flip.
//!
//! The controller reports through `tracing`. Hosts install a console
//! subscriber with [`LoggingBuilder`]; tests attach a [`CaptureLayer`] to read
//! back the events a board emitted.
//!
//! ## Usage
//!
//! ```ignore
//! use cardflip_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new().with_filter("cardflip_core=debug").init()?;
//! ```
//!
//! ```ignore
//! use cardflip_core::logging::CaptureLayer;
//! use tracing_subscriber::prelude::*;
//!
//! let capture = CaptureLayer::new();
//! let subscriber = tracing_subscriber::registry().with(capture.clone());
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!("hello");
//! });
//! assert_eq!(capture.entries()[0].msg, "hello");
//! ```

pub mod entry;
pub mod layer;

pub use entry::DiagnosticEntry;
pub use layer::{CaptureLayer, LoggingBuilder, DEFAULT_FILTER};
