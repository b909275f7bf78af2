//! # Introduction
//!
//! Sortty animates comparison-based sorting algorithms on a random array of
//! integers, one swap per frame, in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution model
//!
//! ```text
//! Config → Sequence → Algorithm::start → SortStep::advance (per tick) → TUI
//! ```
//!
//! 1. [`config`] — command-line parsing and validation.
//! 2. [`sequence`] — the fixed-length [`sequence::Sequence`] being sorted.
//! 3. [`engine`] — sort algorithms as resumable state machines that stop after
//!    every swap and report a [`engine::StepResult`].
//! 4. [`ui`] — ratatui-based host loop that alternates between advancing the
//!    active run, polling keys and drawing; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Bubble sort and insertion sort, each in ascending or descending order.

pub mod config;
pub mod engine;
pub mod sequence;
pub mod ui;
