//! 컨트롤러 구현

pub mod login;
pub mod signup;

pub use login::LoginController;
pub use signup::SignUpController;
