pub mod contact_use_cases;
pub mod ports;
pub mod use_cases;

pub use contact_use_cases::ContactUseCases;
