use super::{ExportFormat, WorkflowSnapshot};
use crate::error::SnapshotError;
use std::io::Write;

/// An external consumer of a workflow snapshot (a run view, a download, ...).
pub trait WorkflowSink {
    fn name(&self) -> &str;

    fn accept(&mut self, snapshot: WorkflowSnapshot) -> Result<(), SnapshotError>;
}

/// Keeps every snapshot it receives.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub received: Vec<WorkflowSnapshot>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&WorkflowSnapshot> {
        self.received.last()
    }
}

impl WorkflowSink for CollectingSink {
    fn name(&self) -> &str {
        "collector"
    }

    fn accept(&mut self, snapshot: WorkflowSnapshot) -> Result<(), SnapshotError> {
        self.received.push(snapshot);
        Ok(())
    }
}

/// Encodes each snapshot into a writer, such as stdout or an export file.
pub struct WriterSink<W: Write> {
    writer: W,
    format: ExportFormat,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: ExportFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> WorkflowSink for WriterSink<W> {
    fn name(&self) -> &str {
        "writer"
    }

    fn accept(&mut self, snapshot: WorkflowSnapshot) -> Result<(), SnapshotError> {
        let bytes = snapshot.encode(self.format)?;
        let io_error = |e: std::io::Error| SnapshotError::SinkRejected {
            sink: "writer".to_string(),
            message: e.to_string(),
        };
        self.writer.write_all(&bytes).map_err(io_error)?;
        if self.format != ExportFormat::Binary {
            self.writer.write_all(b"\n").map_err(io_error)?;
        }
        self.writer.flush().map_err(io_error)
    }
}
