//! `logline` — render JSON-structured log events as console lines.
//!
//! One flat JSON object goes in; one human-readable, optionally colorized,
//! newline-terminated line comes out. Field order is preserved as the
//! producer wrote it: the well-known parts (timestamp, level, caller,
//! message) render first in a configurable order, and every remaining field
//! follows as `name=value` pairs in original order, with an `error` field
//! promoted to the front.
//!
//! The crate is meant to sit at the tail of a logging pipeline, behind
//! anything that writes one JSON-encoded event per call: wrap the real sink
//! in a [`ConsoleWriter`], or call [`render`] directly.
//!
//! # Example
//!
//! ```
//! use logline::{Config, render};
//!
//! let config = Config {
//!     no_color: true,
//!     ..Config::default()
//! };
//!
//! let line = render(br#"{"level":"info","message":"ready","port":8080}"#, &config).unwrap();
//! assert_eq!(line, "<nil> INF ready port=8080\n");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod fields;
pub mod timestamp;
pub mod writer;

mod color;
mod level;
mod parts;

// Re-export primary API types for convenience.
pub use config::{Config, NameFormatter, ValueFormatter};
pub use error::{ConfigError, DecodeError};
pub use event::{Event, Value, decode};
pub use fields::FieldNames;
pub use timestamp::TimeInputFormat;
pub use writer::{ConsoleWriter, render, render_into};
