use fp_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization (3) ---
    Unauthorized = 3,

    // --- Input validation (4–6) ---
    InvalidConfig = 4,
    InvalidAmount = 5,
    BalanceMismatch = 6,

    // --- Payments (7) ---
    InsufficientFunds = 7,

    // --- Arithmetic guards (8–9) ---
    Overflow = 8,
    PrecisionLoss = 9,

    // --- Pool state (10) ---
    SharesOutstanding = 10,
}

impl From<MathError> for Error {
    fn from(err: MathError) -> Self {
        match err {
            MathError::Overflow | MathError::Underflow => Error::Overflow,
            MathError::DivisionByZero => Error::PrecisionLoss,
            MathError::NegativeInput => Error::InvalidAmount,
        }
    }
}
