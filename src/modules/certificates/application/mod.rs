pub mod certificate_use_cases;
pub mod ports;
pub mod use_cases;

pub use certificate_use_cases::CertificateUseCases;
