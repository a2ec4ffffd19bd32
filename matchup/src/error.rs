use matchdex_chart::ChartError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchupError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ChartError),

    #[error("Type chart is missing entries; rebuild it from a base chart")]
    EmptyChart,
}
