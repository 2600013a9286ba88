pub mod benchmark;
pub mod diagnosis;
pub mod record;
pub mod request;
pub mod trend;
