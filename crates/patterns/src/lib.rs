// crates/patterns/src/lib.rs
//! Small worked designs around two object-oriented principles.
//!
//! Each module is self-contained: `employee` and `registry` split data
//! handling from reporting and activity logging so every type has one
//! reason to change, and `notify` dispatches over a one-method trait so
//! adding a delivery channel never touches the sender.
//!
//! None of the operations here do real work; implementations emit a
//! [`log`] record and nothing else.

pub mod employee;
pub mod notify;
pub mod registry;
