//! Sequence based optimizers for the rectangular Strip Packing Problem.
//!
//! Every optimizer searches over the order and orientation of the items and evaluates a candidate
//! sequence by packing it with [`strippack::placement::bl_pack`].

use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod opt;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
