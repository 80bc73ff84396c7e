//! Shared test doubles.

#![allow(dead_code, unused_imports)]

use mvp_counter::counter::{CounterModel, CounterView};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// View double that records every pushed value.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    log: Rc<RefCell<Vec<u64>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Vec<u64> {
        self.log.borrow().clone()
    }
}

impl CounterView for RecordingView {
    fn update_counter(&mut self, value: u64) {
        self.log.borrow_mut().push(value);
    }
}

/// Model double that starts at an arbitrary count and records calls.
#[derive(Debug, Default)]
pub struct StubModel {
    pub count: u64,
    pub calls: Vec<&'static str>,
}

impl StubModel {
    pub fn starting_at(count: u64) -> Self {
        Self {
            count,
            calls: Vec::new(),
        }
    }
}

impl CounterModel for StubModel {
    fn count(&self) -> u64 {
        self.count
    }

    fn increment(&mut self) {
        self.calls.push("increment");
        self.count += 10;
    }

    fn reset(&mut self) {
        self.calls.push("reset");
        self.count = 0;
    }
}

/// `Write` sink whose contents stay readable after it is moved into a view.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// `Write` sink that always fails, for broken-pipe behaviour.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}
