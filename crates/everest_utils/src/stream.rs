//! Output streams that the CLI and its logger write into.

use std::{
    fmt,
    io::{self, Write},
    sync::Arc,
};

use parking_lot::Mutex;

/// A clonable sink for output produced by the tool.
///
/// The process streams are looked up on every write, so cloning a stream is
/// cheap. The [OutputStream::Buffer] variant captures everything that is
/// written into a shared buffer, which is what the tests use.
#[derive(Clone)]
pub enum OutputStream {
    Stdout,
    Stderr,
    Buffer(Arc<Mutex<Vec<u8>>>),
}

impl OutputStream {
    pub fn stdout() -> Self {
        Self::Stdout
    }

    pub fn stderr() -> Self {
        Self::Stderr
    }

    /// Create a stream that writes into a fresh in-memory buffer.
    pub fn buffer() -> Self {
        Self::Buffer(Arc::new(Mutex::new(Vec::new())))
    }

    /// Get the captured contents of a [OutputStream::Buffer], lossily
    /// converted into a string. The process streams have no contents.
    pub fn contents(&self) -> String {
        match self {
            Self::Buffer(buffer) => String::from_utf8_lossy(&buffer.lock()).into_owned(),
            Self::Stdout | Self::Stderr => String::new(),
        }
    }
}

impl fmt::Debug for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::Stderr => write!(f, "stderr"),
            Self::Buffer(buffer) => write!(f, "buffer({} bytes)", buffer.lock().len()),
        }
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout => io::stdout().write(buf),
            Self::Stderr => io::stderr().write(buf),
            Self::Buffer(buffer) => buffer.lock().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        // Hold the process lock for the whole line so concurrent log records
        // don't interleave.
        match self {
            Self::Stdout => io::stdout().lock().write_all(buf),
            Self::Stderr => io::stderr().lock().write_all(buf),
            Self::Buffer(buffer) => buffer.lock().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().flush(),
            Self::Stderr => io::stderr().flush(),
            Self::Buffer(_) => Ok(()),
        }
    }
}

/// Write a line to a stream, ignoring any errors. Used by the logger, which
/// has nowhere to report a failure to write a log record.
#[macro_export]
macro_rules! stream_writeln {
    ($out:expr, $($arg:tt)*) => {{
        let _ = writeln!($out, $($arg)*);
    }};
}
