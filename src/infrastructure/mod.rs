//! Infrastructure layer implementing domain repository traits.
//!
//! - [`memory`] - In-memory stores; nothing survives a restart

pub mod memory;
