//! Concrete adapter implementations for ports.

pub mod env_config_adapter;
pub mod file_config_adapter;
pub mod html_file_adapter;
pub mod html_report_adapter;
pub mod imap_adapter;
pub mod smtp_adapter;
