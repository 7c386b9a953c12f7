//! Command implementations for supergraph

pub mod closure;
pub mod components;
pub mod describe;
pub mod dispatch;
pub mod dot;
pub mod format;
pub mod init;
pub mod json_builders;
pub mod paths;
