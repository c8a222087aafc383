//! `pathpilot-core` -- vocabulary shared by the database bootstrap.
//!
//! Describes the user and index the initializer provisions. No I/O lives
//! here; the MongoDB adapter is in `pathpilot-db`.

pub mod indexes;
pub mod roles;
pub mod users;
