//! `scanflags` is a command line flag parser for Rust.
//!
//! Declare flags of any supported primitive type by giving a default value; the type of the default is the type of the flag.
//! Flags are matched anywhere in the argument list, in any order, mixed with other arguments.
//! The matched text is converted to the flag's type and exposed through the [`FlagHandle`] returned at registration.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/demo.rs")]
//! ```
//!
//! ```console
//! $ demo -count=2 extra
//! Test2
//! Test2
//! test: true
//!
//! $ demo -test=no
//! Test2
//! test: no
//!
//! $ demo -test2=hi
//! hi
//! test: =hi
//!
//! $ demo -h
//! usage msg
//! The greeting.
//! How many times to greet.
//! Test2
//! test: true
//!
//! $ demo -count=two
//! Parse error: cannot convert 'two' to u32 for flag '-count'.
//!
//! $ demo -count
//! flag provided but not defined: -count
//! ```
//!
//! # Flags
//! A flag is registered on a [`FlagSet`] with a name, a usage text and a default [`Value`].
//! The name is given a leading `-` when missing; `-h` and `-help` are reserved for help.
//!
//! Supported types: `String`, `bool`, `u8`, `u16`, `u32`, `u64`, `usize`, `i8`, `i16`, `i32`, `i64`, `isize`, `f32`, `f64`, [`Complex64`] and [`Complex128`].
//! Integers are read in base 10; the plain `usize`/`isize` are limited to the 32 bit range.
//! Text for `String` and `bool` flags is kept as is: a `bool` flag given `-verbose=true` holds the text `"true"`.
//!
//! # Cli Semantics
//! * Each flag takes the first argument that starts with its name and is longer than it.
//! The character right after the name is a separator and is skipped, so `-count=42`, `-count:42` and `-count 42` (as one argument) are all `42`.
//! * Matching is by prefix, in registration order, and every flag scans every argument.
//! A flag `-count` therefore also matches `-counter=5` (as `r=5`).
//! * A flag that isn't given, or is given empty text (`-count=`), takes its default.
//! * An argument equal to a flag's name (`-count`) is an error: a value is always required.
//! * A value that cannot be converted to the flag's type is an error.
//! * Either help token anywhere in the arguments prints every flag's usage after parsing.
//!
//! [`FlagSet::parse`] prints errors and exits the process (status `2` for a missing value, `1` for a failed conversion).
//! [`FlagSet::parse_tokens`] returns them as a [`ParseError`] instead.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while registering and parsing.
pub use scanflags_core::*;
