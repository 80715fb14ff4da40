pub mod favorite;
pub mod people;
pub mod planet;
pub mod prelude;
pub mod token_blocked_list;
pub mod user;
