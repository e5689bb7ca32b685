//! Sink implementations

pub mod stdout;
pub mod writer;

pub use stdout::StdoutSink;
pub use writer::WriterSink;

pub use crate::core::Sink;
