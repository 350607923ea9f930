//! # slotbits
//!
//! Bit-vector availability engine for booking systems.
//!
//! A resource's day is a packed bitset with one bit per time unit (1 = free).
//! From it the engine finds free runs, builds "a booking of length N can start
//! here" vectors, composes them for back-to-back service chains, answers point
//! queries, and aggregates free time into workload weights. Everything works a
//! word at a time: masks and `leading_zeros` instead of per-bit loops.
//!
//! ## Modules
//!
//! - [`mask`] — left/right word mask tables
//! - [`vector`] — `DayVector` and the text-or-words `BitsetInput`
//! - [`codec`] — wire text ⇄ `DayVector`
//! - [`scan`] — bit iteration, free runs, first set/unset bit
//! - [`booking`] — booking vectors for a service duration
//! - [`sequence`] — left shift and back-to-back sequence composition
//! - [`availability`] — range queries, first/last free minute, merging
//! - [`workload`] — free-time population counts per resource
//! - [`slots`] — wall-clock slots from day records
//! - [`day`] — day record input types
//! - [`config`] — `TimeUnit` and `SlotConfig`
//! - [`error`] — Error types

pub mod availability;
pub mod booking;
pub mod codec;
pub mod config;
pub mod day;
pub mod error;
pub mod mask;
pub mod scan;
pub mod sequence;
pub mod slots;
pub mod vector;
pub mod workload;

pub use availability::{first_last_minutes, is_slot_available, FreeBounds};
pub use booking::{build_booking_vector, build_booking_vector_for_minutes};
pub use codec::{decode, encode, prepare};
pub use config::{SlotConfig, TimeUnit, MINUTES_IN_DAY};
pub use day::{parse_days, DayRecord, ResourceBitset};
pub use error::SlotError;
pub use mask::{Word, WORD_BITS};
pub use scan::{find_first_one, find_first_zero, free_run_starts, free_runs, scan_bits, Run};
pub use sequence::{compose_sequence, left_shift, sequence_booking_vector};
pub use slots::{make_slots, Slot};
pub use vector::{BitsetInput, DayVector};
pub use workload::{workload_weights, WorkloadWeight};
