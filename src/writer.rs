//! The render pipeline and the console sink.
//!
//! [`render`] and [`render_into`] are pure functions from event bytes and
//! configuration to one newline-terminated line. [`ConsoleWriter`] adapts the
//! pipeline to [`std::io::Write`] so it can sit at the tail of any logging
//! pipeline that writes JSON-encoded events.

use std::io;

use crate::config::Config;
use crate::error::DecodeError;
use crate::{event, fields, parts};

/// Render one event to a freshly allocated line.
pub fn render(event: &[u8], config: &Config) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(event.len());
    render_into(event, config, &mut out)?;
    Ok(out)
}

/// Render one event into `out`, appending exactly one newline-terminated
/// line: configured parts first, then the remaining fields. Nothing is
/// appended when decoding fails.
pub fn render_into(event: &[u8], config: &Config, out: &mut String) -> Result<(), DecodeError> {
    let decoded = event::decode(event)?;

    for part in &config.parts_order {
        parts::write_part(out, &decoded, part, config);
    }
    fields::write_fields(out, &decoded, config);
    out.push('\n');
    Ok(())
}

/// An ordered console sink: each `write` call takes one JSON-encoded event
/// and emits one rendered line to the wrapped writer.
///
/// The scratch buffer is reused across calls purely as a throughput
/// optimization; the `&mut self` receiver keeps it private to the call in
/// flight, so any number of writers can run on separate threads.
pub struct ConsoleWriter<W> {
    out: W,
    config: Config,
    buf: String,
}

impl<W: io::Write> ConsoleWriter<W> {
    /// Wrap `out`. An explicitly empty `parts_order` resolves to the default
    /// order here, at construction; rendering never mutates configuration.
    pub fn new(out: W, mut config: Config) -> Self {
        if config.parts_order.is_empty() {
            config.parts_order = config.field_names.default_parts_order();
        }
        Self {
            out,
            config,
            buf: String::with_capacity(256),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> io::Write for ConsoleWriter<W> {
    /// Render one complete event. Either the whole line reaches the sink or,
    /// on a decode error (`ErrorKind::InvalidData`), nothing does. Sink
    /// errors propagate as-is and are never retried.
    fn write(&mut self, event: &[u8]) -> io::Result<usize> {
        self.buf.clear();
        render_into(event, &self.config, &mut self.buf)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.out.write_all(self.buf.as_bytes())?;
        Ok(event.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
