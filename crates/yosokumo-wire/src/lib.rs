//! Protocol Buffers codec for Yosokumo entities.
//!
//! Every entity in `yosokumo-model` has a decode and an encode entry point on
//! [`ProtobufCodec`]. Decoding validates the bytes before building anything:
//! empty buffers, malformed records, out-of-range enum numbers, cells without
//! a value and duplicate collection keys are all reported as [`WireError`]s.
//!
//! # Example
//!
//! ```
//! use yosokumo_model::{Level, Predictor, PredictorStatus, PredictorType};
//! use yosokumo_wire::ProtobufCodec;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = ProtobufCodec::new();
//! let predictor = Predictor::with_attributes(
//!     11111,
//!     PredictorStatus::Active,
//!     PredictorType::Categorical,
//!     Level::Interval,
//! )?;
//! let bytes = codec.encode_predictor(&predictor)?;
//! assert_eq!(codec.decode_predictor(&bytes)?, predictor);
//! # Ok(())
//! # }
//! ```

mod codec;
mod decode;
mod encode;
mod enums;
pub mod error;
pub mod options;
pub mod schema;

pub use codec::ProtobufCodec;
pub use decode::FromWire;
pub use encode::ToWire;
pub use error::{Result, WireError};
pub use options::{CONTENT_TYPE, CodecOptions};
