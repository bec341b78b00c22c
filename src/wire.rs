mod envelope;
mod length_prefix;

pub use envelope::{Argument, Dictionary, DictionaryEntry, List, Request, Response, Set, Tuple};
pub use length_prefix::{decode_length_prefixed, encode_length_prefixed};
