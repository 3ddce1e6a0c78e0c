pub mod emailjs;
pub mod http;
pub mod smtp;

/// Shown in place of a phone number the customer did not provide.
pub const MISSING_PHONE: &str = "N/A";
