use thiserror::Error;

pub type PrimeResult<T> = Result<T, PrimeError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PrimeError {
    #[error("cannot factorize 0")]
    Zero,
    #[error("no prime found in ({after}, {bound}]")]
    NoPrimeFound { after: u64, bound: u64 },
    #[error("{operation}({n}) overflows u64")]
    Overflow { operation: &'static str, n: u64 },
}
