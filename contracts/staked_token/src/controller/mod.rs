pub mod rewards;
pub mod stake;
pub mod token;
