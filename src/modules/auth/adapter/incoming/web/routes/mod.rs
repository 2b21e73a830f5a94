mod login_user;
mod logout_user;
mod refresh_token;
mod register_user;

pub use login_user::*;
pub use logout_user::*;
pub use refresh_token::*;
pub use register_user::*;
