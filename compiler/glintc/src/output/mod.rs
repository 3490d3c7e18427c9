//! Output sinks for rendered program output.
//!
//! The pipeline returns strings and never writes anywhere itself; the CLI
//! hands the result to an [`OutputHandler`]. Enum dispatch keeps the sink
//! choice static.

use parking_lot::Mutex;

/// Captures output in memory, for tests and embedding.
#[derive(Default)]
pub struct BufferOutput {
    buffer: Mutex<String>,
}

impl BufferOutput {
    pub fn new() -> Self {
        BufferOutput {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }
}

/// Where rendered output goes.
pub enum OutputHandler {
    Stdout,
    Buffer(BufferOutput),
}

impl OutputHandler {
    pub fn stdout() -> Self {
        OutputHandler::Stdout
    }

    pub fn buffer() -> Self {
        OutputHandler::Buffer(BufferOutput::new())
    }

    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(b) => b.println(msg),
        }
    }

    /// Captured output; empty for sinks that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(b) => b.get_output(),
            Self::Stdout => String::new(),
        }
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::stdout()
    }
}

#[cfg(test)]
mod tests;
