pub mod gateway;
pub mod navigator;
