use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    InvalidAmount = 4,
    #[doc = "Cannot remove stake for more tokens than owned"]
    InsufficientStake = 5,
    InsufficientBalanceOrAllowance = 6,
    #[doc = "Epoch length must be between 1 second and 1 day"]
    InvalidEpochLength = 7,
    #[doc = "Can only setup 180 days of rewards at a time"]
    InvalidSchedule = 8,
    RewardsStillVesting = 9,
    #[doc = "Deliberately rejects a stake that would mint zero shares or an unstake that would pay out zero base asset, instead of consuming the input for nothing"]
    StakeTooSmall = 10,
    ArithmeticOverflow = 11,
    CastingFailure = 12,
    InvalidDecimals = 13,
    InvalidExpirationLedger = 14,
}

pub type VaultResult<T = ()> = Result<T, ErrorCode>;
