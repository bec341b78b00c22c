mod codec_error;
mod scalar_codec;
mod value;
mod value_codec;

pub use codec_error::CodecError;
pub use scalar_codec::{decode_scalar, encode_scalar};
pub use value::Value;
pub use value_codec::{decode_value, encode_value};
