pub mod password;
pub mod token_hasher;

pub use token_hasher::hash_token;
