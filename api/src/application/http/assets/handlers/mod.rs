pub mod favicon;
pub mod service_worker;
