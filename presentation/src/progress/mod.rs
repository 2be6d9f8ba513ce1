//! Progress indication for slow operations

pub mod spinner;
