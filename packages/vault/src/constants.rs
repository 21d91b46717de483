// ################################################################
//                             TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ################################################################
//                             Time
// ################################################################

pub const ONE_HOUR: u64 = 60 * 60;
pub const ONE_DAY: u64 = 24 * ONE_HOUR;

// ################################################################
//                         Reward Schedule
// ################################################################

/// Shortest epoch a reward schedule may use, in seconds.
pub const MIN_EPOCH_LENGTH: u64 = 1;
/// Longest epoch a reward schedule may use, in seconds.
pub const MAX_EPOCH_LENGTH: u64 = ONE_DAY;
/// Upper bound on `total_epochs * epoch_length` for a single funding (180 days).
pub const MAX_REWARDS_DURATION: u64 = 180 * ONE_DAY;

// ################################################################
//                             Token
// ################################################################

pub const MAX_DECIMALS: u32 = 18;
