pub mod token;

pub use token::{HmacTokenAuthenticator, sign_token};
