//! Character-device front end.
//!
//! A client opens the device, reads the status report to EOF, and writes
//! short commands.  Reads follow single-shot file semantics: the report
//! is rendered when the position is 0, later reads continue through that
//! same rendering, and a read at or past its end returns 0.  Re-opening
//! (or [`DeviceFile::rewind`]) renders a fresh report.

use std::io;
use std::sync::Arc;

use log::debug;

use crate::app::events::CounterEvent;
use crate::app::ports::{ButtonPort, DisplayPort, EventSink};
use crate::app::service::CounterService;
use crate::error::{Error, Result};

use super::command::parse_command;
use super::status::{StatusText, format_status};

/// Per-open state: file position plus the report being read.
#[derive(Debug, Default)]
pub struct DeviceFile {
    pos: usize,
    rendered: Option<StatusText>,
}

impl DeviceFile {
    /// Current read position in bytes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Seek back to 0; the next read renders a fresh report.
    pub fn rewind(&mut self) {
        self.pos = 0;
        self.rendered = None;
    }
}

/// Client-side handle on a running engine.
pub struct CounterDevice<B, D> {
    service: Arc<CounterService<B, D>>,
}

impl<B, D> Clone for CounterDevice<B, D> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<B: ButtonPort, D: DisplayPort> CounterDevice<B, D> {
    pub fn new(service: Arc<CounterService<B, D>>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &CounterService<B, D> {
        &self.service
    }

    /// Nothing to set up per open.
    pub fn open(&self) -> DeviceFile {
        debug!("device: open");
        DeviceFile::default()
    }

    /// Nothing to tear down per open.
    pub fn release(&self, file: DeviceFile) {
        debug!("device: release at pos {}", file.pos);
    }

    /// Copy the next chunk of the status report into `buf`.
    /// Returns 0 once the whole report has been delivered.
    pub fn read(&self, file: &mut DeviceFile, buf: &mut [u8]) -> usize {
        if file.pos == 0 || file.rendered.is_none() {
            file.rendered = Some(format_status(&self.service.snapshot()));
        }
        let Some(text) = file.rendered.as_ref() else {
            return 0;
        };
        let bytes = text.as_bytes();
        if file.pos >= bytes.len() {
            return 0;
        }
        let n = buf.len().min(bytes.len() - file.pos);
        buf[..n].copy_from_slice(&bytes[file.pos..file.pos + n]);
        file.pos += n;
        n
    }

    /// Stream the rest of the report into `out`.
    pub fn read_to(&self, file: &mut DeviceFile, out: &mut impl io::Write) -> Result<usize> {
        let mut chunk = [0u8; 32];
        let mut total = 0;
        loop {
            let n = self.read(file, &mut chunk);
            if n == 0 {
                return Ok(total);
            }
            out.write_all(&chunk[..n]).map_err(|_| Error::IoFault)?;
            total += n;
        }
    }

    /// Parse and apply one command.  Returns the number of bytes consumed.
    pub fn write(
        &self,
        _file: &mut DeviceFile,
        data: &[u8],
        sink: &mut impl EventSink,
    ) -> Result<usize> {
        let cmd = match parse_command(data) {
            Ok(cmd) => cmd,
            Err(e) => {
                if let Error::InvalidArgument(reason) = e {
                    sink.emit(&CounterEvent::CommandRejected(reason));
                }
                return Err(e);
            }
        };
        self.service.apply(cmd, sink)?;
        Ok(data.len())
    }
}
