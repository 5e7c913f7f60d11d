pub mod aio;
pub mod blocking;
pub mod dto;
pub mod ports;
pub mod rows;
