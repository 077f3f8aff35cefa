pub use super::container::Entity as Container;
pub use super::user::Entity as User;
