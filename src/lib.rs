#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
mod input;
mod player;
mod rules;
mod scan;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use input::*;
pub use player::*;
pub use rules::*;
pub use scan::*;
#[cfg(feature = "std")]
pub use cli::{Console, SessionOptions};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
