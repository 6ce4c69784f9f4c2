//! Core domain types and logic.

pub mod error;
pub mod filter;
pub mod mail_config;
pub mod record;
pub mod reference_list;
pub mod signal;
pub mod table;
