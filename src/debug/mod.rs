//! Developer diagnostics, only compiled with the `debugging` feature

pub(crate) mod env;
pub(crate) mod svg;
