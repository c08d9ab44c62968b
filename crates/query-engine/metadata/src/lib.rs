//! Statically declared tables of the climate store.

pub mod metadata;
