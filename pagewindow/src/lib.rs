//! A headless sliding-window page engine for archive readers.
//!
//! For drive-loop and page-source/render-sink glue, see the
//! `pagewindow-adapter` crate.
//!
//! This crate decides, as the user scrolls a long ordered sequence of images,
//! which pages are currently materialized and which are evicted: a contiguous
//! `(head, tail]` window slides over the page list, extended at one edge and
//! trimmed at the other, one page per step.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - scroll notifications (offset, max scrollable distance)
//! - a fixed-interval timer that calls [`Pager::step`]
//! - a render sink that materializes/destroys page elements on request
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod direction;
mod options;
mod pager;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use direction::DirectionTracker;
pub use options::{DEFAULT_EVICT_PERCENT, DEFAULT_MAX_LEN, OnChangeCallback, PagerOptions};
pub use pager::Pager;
pub use types::{Direction, Edge, EvictRequest, MountRequest, Page, StepOutcome};
pub use window::Window;
