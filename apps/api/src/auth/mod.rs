// Account registration and login. Passwords are stored as argon2 hashes.

pub mod handlers;
pub mod password;
