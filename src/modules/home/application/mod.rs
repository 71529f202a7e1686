pub mod home_use_cases;
pub mod ports;
pub mod use_cases;

pub use home_use_cases::HomeUseCases;
