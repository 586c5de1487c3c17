//! Forum domain: threads, first-level comments, second-level replies and
//! comment likes.

pub mod comment;
pub mod details;
pub mod models;
pub mod payload;
pub mod postgres;
pub mod reply;
pub mod routes;
pub mod store;
pub mod thread;

#[cfg(test)]
pub mod testing;
