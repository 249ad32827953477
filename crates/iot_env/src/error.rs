use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvError {
    #[error("invalid action {action}: expected a value in 0..{action_size}")]
    InvalidAction { action: usize, action_size: usize },
    #[error("unknown observation row {row}: table has {rows} rows")]
    UnknownRow { row: usize, rows: usize },
}
