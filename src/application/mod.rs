//! Application layer: the rules each demo applies to its input.

pub mod services;
