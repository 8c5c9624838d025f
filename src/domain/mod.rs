//! Core validation domain: the compiled-in limit table and the batch validator.

pub mod limits;
pub mod validation;
