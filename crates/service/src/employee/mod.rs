pub mod http;
pub mod ranking;
pub mod service;
pub mod upstream;
