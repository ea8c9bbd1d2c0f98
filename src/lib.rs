// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Frame generation and timed playback for sorting algorithm
//! visualizations.
//!
//! Sortviz turns an array and a sorting algorithm into a deterministic
//! sequence of array snapshots, then replays that sequence into a displayed
//! array on a cancellable, host-driven timer. It never renders anything:
//! hosts read the displayed array (or receive each frame through a
//! [`playback::FrameSink`]) and draw it however they like.
//!
//! # Key entry points
//!
//! - [`frames::generate`] - pure frame generation for one [`Algorithm`]
//! - [`playback::PlaybackScheduler`] - replay state machine
//!   (`Idle → Sorting → Finished`) with revocable step handles
//! - [`engine::SortingEngine`] - session state: displayed array, selected
//!   algorithm, speed and the random source used on reset
//! - [`options::EngineOptions`] - TOML configuration
//!
//! # Driving playback
//!
//! The scheduler never reads the clock. Hosts pass `now` in and either call
//! [`engine::SortingEngine::tick`] from their frame loop or sleep until
//! [`engine::SortingEngine::next_due`]:
//!
//! ```
//! use sortviz::engine::SortingEngine;
//! use sortviz::options::EngineOptions;
//! use sortviz::playback::FrameEvent;
//! use web_time::Instant;
//!
//! let mut engine =
//!     SortingEngine::with_values(EngineOptions::default(), vec![5, 3, 1, 4, 2])?;
//! let _ = engine.request_play(|_: &FrameEvent<'_>| {}, Instant::now());
//! while let Some(due) = engine.next_due() {
//!     let _ = engine.tick(due);
//! }
//! assert_eq!(engine.array(), [1, 2, 3, 4, 5]);
//! assert!(engine.requires_reset());
//! # Ok::<(), sortviz::error::SortvizError>(())
//! ```

pub mod algorithm;
pub mod engine;
pub mod error;
pub mod frames;
pub mod options;
pub mod playback;
pub mod util;

pub use algorithm::Algorithm;
pub use error::SortvizError;
pub use frames::{generate, Frame, FrameSequence};
