use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PanError {
    #[error("pan position {value} is outside -32..=32")]
    OutOfRange { value: i8 },
}
