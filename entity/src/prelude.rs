pub use super::favorite::Entity as Favorite;
pub use super::people::Entity as People;
pub use super::planet::Entity as Planet;
pub use super::token_blocked_list::Entity as TokenBlockedList;
pub use super::user::Entity as User;
