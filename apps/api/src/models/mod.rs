pub mod audit;
pub mod email;
