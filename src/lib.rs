//! Orrery — star catalog administration backend.
//!
//! A CRUD backend over users, people, planets, and per-user favorites,
//! exposed through an administrative JSON API whose create/edit forms are
//! synthesized from statically-declared entity metadata.

pub mod model;
pub mod server;
