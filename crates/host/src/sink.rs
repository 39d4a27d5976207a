use std::io;
use std::io::Write;

/// Where rendered report text goes. The engine only returns strings; hosts
/// route them to command echo, dockable panes, or files.
pub trait ReportSink {
    fn emit(&mut self, text: &str) -> io::Result<()>;
}

/// Routes report text to any `io::Write` (command echo, log file).
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriteSink<W> {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

/// Accumulates emitted text in memory (UI panes, tests).
#[derive(Debug, Default)]
pub struct BufferSink {
    buffer: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }
}

impl ReportSink for BufferSink {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.buffer.push_str(text);
        Ok(())
    }
}
