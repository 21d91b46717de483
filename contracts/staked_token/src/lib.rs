#![no_std]

mod allowance;
mod balance;
mod contract;
mod controller;
mod events;
mod math;
mod staked_token;
mod storage;

pub use crate::contract::{StakedToken, StakedTokenClient};
pub use crate::storage::{Config, RewardSchedule, StakingPool};
pub use vault::error::ErrorCode;
