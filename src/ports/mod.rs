//! Port traits at the I/O seams of the report pipeline.

pub mod config_port;
pub mod report_port;
pub mod report_sink_port;
pub mod report_source_port;
