//! Role names stored in `users.role`.
//!
//! Must match the column default in `0001_create_users.sql`. Every account
//! created through registration gets [`ROLE_USER`].

pub const ROLE_USER: &str = "user";
