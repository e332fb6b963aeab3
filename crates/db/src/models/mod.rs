pub mod signal;
pub mod user;

pub use signal::Signal;
pub use user::User;
