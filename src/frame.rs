/// Maximum number of file bytes carried by a single data frame.
pub const CHUNK_SIZE: usize = 1024;
/// Payload of the frame that closes the transfer.
pub const END_MARKER: &'static [u8] = b"END";
/// Text the receiver answers with after every frame it stored.
pub const ACK_MARKER: &'static str = "ACK";

/// Single unit of the transfer, transmitted as one datagram payload.
///
/// The wire carries the raw payload only. There is no type tag, length prefix
/// or checksum, the receiver infers the meaning of each frame from the
/// transfer order: first frame is the file name, then the data frames, and
/// the frame equal to `END` closes the transfer.
#[derive(Debug, PartialEq)]
pub enum Frame<'a> {
    Name(&'a [u8]),
    Data(&'a [u8]),
    End,
}

impl<'a> Frame<'a> {
    /// Bytes to put on the wire for this frame.
    pub fn payload(&self) -> &[u8] {
        match self {
            Frame::Name(name) => name,
            Frame::Data(data) => data,
            Frame::End => END_MARKER,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frame::Name(_) => "name",
            Frame::Data(_) => "data",
            Frame::End => "end",
        }
    }
}

/// Check whether the datagram payload decodes to exactly the acknowledgment text.
pub fn is_ack(payload: &[u8]) -> bool {
    match std::str::from_utf8(payload) {
        Ok(text) => text == ACK_MARKER,
        Err(_) => false,
    }
}
