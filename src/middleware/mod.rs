//! Actix middleware shared by the HTTP surface.

pub mod trace;
