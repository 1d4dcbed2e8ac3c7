use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("{name} = {value} is outside [0, 32768)")]
    OutOfRange { name: &'static str, value: u32 },
    #[error("arithmetic overflow while evaluating {0}")]
    Overflow(&'static str),
    #[error("recursion deeper than {0} frames; use the memoized evaluator")]
    DepthExceeded(usize),
    #[error("the monument takes exactly 5 coins, got {0}")]
    CoinCount(usize),
    #[error("unknown coin value {0}")]
    UnknownCoin(i64),
    #[error("no arrangement of the coins gives {target}")]
    NoSolution { target: i64 },
    #[error("search cancelled")]
    Cancelled,
    #[error("unknown command {0:?} (expected coins, teleporter or search)")]
    UnknownCommand(String),
    #[error("could not install Ctrl-C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
