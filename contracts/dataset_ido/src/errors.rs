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
    CapExceeded = 6,

    // --- Sale state (7–8) ---
    InvalidState = 7,
    SaleClosed = 8,

    // --- Trading and claims (9–11) ---
    SlippageExceeded = 9,
    InsufficientFunds = 10,
    NothingToClaim = 11,

    // --- Arithmetic guards (12–13) ---
    Overflow = 12,
    PrecisionLoss = 13,
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
