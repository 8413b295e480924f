use std::net::{UdpSocket, SocketAddr};
use std::io::{Error, ErrorKind, Result};
use crate::Loggable;

/// Check whether the error means that the read timeout expired.
pub fn is_timeout(error: &Error) -> bool {
    let kind = error.kind();
    return kind == ErrorKind::WouldBlock || kind == ErrorKind::TimedOut;
}

pub fn recv_with_timeout(
    socket: &UdpSocket,
    buff: &mut [u8],
    log: Box<&dyn Loggable>,
) -> Result<(usize, SocketAddr)> {
    // receive datagram
    let result = socket.recv_from(buff);
    if let Err(ref e) = result {
        if !is_timeout(e) {
            log.vlog(&format!("Could not receive from socket {:?}, ignoring", socket.local_addr()));
            log.vlog(&format!("Error: {}", e.to_string()));
        }
    }
    return result;
}
