pub mod identity;
pub mod new_identity;
pub mod password_digest;
pub mod salt;
