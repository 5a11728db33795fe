//! Core module for `scanflags`.
//! See [documentation root](https://docs.rs/scanflags/latest/scanflags/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod complex;
mod constant;
mod model;
mod parser;

pub use api::*;
pub use complex::*;
pub use model::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
