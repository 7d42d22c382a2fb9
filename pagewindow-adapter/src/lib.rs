//! Drive-loop and I/O glue for the `pagewindow` crate.
//!
//! The `pagewindow` crate is UI-agnostic and focuses on the core window
//! policy. This crate provides the framework-neutral pieces a viewer needs
//! around it:
//!
//! - [`Driver`]: a host-driven, cancellable drive loop that polls the policy
//!   at a fixed interval and applies its mount/evict requests
//! - [`PageSource`] / [`RenderSink`]: the narrow interfaces to the archive
//!   side and the rendering side
//! - [`MemorySource`], and with `feature = "zip"` a [`ZipSource`] over an
//!   in-memory archive
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

#[cfg(feature = "zip")]
mod archive;
mod driver;
mod error;
mod sink;
mod source;


#[cfg(feature = "zip")]
pub use archive::ZipSource;
pub use driver::{DEFAULT_INTERVAL_MS, Driver};
pub use error::{DriveError, SourceError};
pub use sink::RenderSink;
pub use source::{MemorySource, PageSource};
