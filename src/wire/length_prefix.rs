use bytes::Buf;
use prost::Message;

/// Frame a structured message with its varint length prefix, ready to send.
pub fn encode_length_prefixed<M: Message>(message: &M) -> Vec<u8> {
    message.encode_length_delimited_to_vec()
}

/// Read one length-prefixed structured message from the front of `buf`.
pub fn decode_length_prefixed<M: Message + Default>(
    buf: &mut impl Buf,
) -> Result<M, prost::DecodeError> {
    M::decode_length_delimited(buf)
}
