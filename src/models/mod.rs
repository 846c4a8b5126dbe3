pub mod country;
pub mod endpoint;
