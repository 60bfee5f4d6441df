//! Pan-law gains for a 65-step tracker panning control.
//!
//! Positions run from -32 (hard left) to 32 (hard right). The centre gain is
//! the -3 dB equal-power reference and each side follows a quadratic curve
//! out to a hard pan of `(1.0, 0.0)` / `(0.0, 1.0)`.

pub mod error;
pub mod frame;
pub mod pan;
pub mod table;

pub use error::PanError;
pub use frame::{pan_block, pan_frame, Frame};
pub use pan::{pan_gains, prepare_table, PanGains, PanLaw, PanPosition, PAN_TABLE};
