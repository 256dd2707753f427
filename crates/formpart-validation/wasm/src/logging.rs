//! tracing output to the browser console

use std::io;

use formpart_validation::ValidatorConfig;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and logs it on flush/drop
pub struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
            self.buffer.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buffer: Vec::new() }
    }
}

/// Console verbosity for `config`: everything with `debug`, warnings only
/// with dev diagnostics, nothing otherwise
pub fn level_for(config: &ValidatorConfig) -> Option<Level> {
    if config.debug {
        Some(Level::DEBUG)
    } else if config.dev_diagnostics {
        Some(Level::WARN)
    } else {
        None
    }
}

/// Install the console subscriber. Later calls are no-ops.
pub fn init(level: Level) {
    // No timestamps: SystemTime is unavailable on wasm32-unknown-unknown
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_max_level(level)
        .try_init();
}
