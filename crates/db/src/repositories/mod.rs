pub mod signal_repo;
pub mod user_repo;

pub use signal_repo::SignalRepo;
pub use user_repo::UserRepo;
