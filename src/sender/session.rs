use std::cmp::min;
use std::fs::File;
use std::io::Read;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::path::Path;
use std::time::Duration;
use itertools::Itertools;

use super::config::Config;
use crate::frame::{is_ack, Frame, CHUNK_SIZE};
use crate::{is_timeout, recv_with_timeout, Loggable, BUFFER_SIZE};

const MAX_BACKOFF_DOUBLING: u32 = 4;

/// State of one file transfer: the socket, the resolved receiver address and
/// the retry policy. The session keeps at most one frame in flight, the next
/// frame is not transmitted until the current one is acknowledged.
pub struct SenderSession {
    socket: UdpSocket,
    destination: SocketAddr,
    timeout: u64,
    attempts: u32,
}

impl SenderSession {
    /// Resolve the receiver address and prepare the socket.
    /// Any setup failure is returned to the caller, a session that exists is usable.
    pub fn connect(config: &Config) -> Result<Self, String> {
        let destination = config.recv_addr()
            .to_socket_addrs()
            .map_err(|e| format!("Can't resolve receiver address {}: {}", config.recv_addr(), e))?
            .next()
            .ok_or_else(|| format!("Receiver address {} does not resolve to anything", config.recv_addr()))?;
        config.vlog(&format!("Receiver address resolved to {}", destination));

        let socket = UdpSocket::bind(config.bind_addr())
            .map_err(|e| format!("Can't bind socket to {}: {}", config.bind_addr(), e))?;
        socket.set_read_timeout(Some(Duration::from_millis(config.timeout() as u64)))
            .map_err(|e| format!("Can't set timeout on the socket: {}", e))?;
        if let Ok(local_addr) = socket.local_addr() {
            config.vlog(&format!("Socket bind to {}", local_addr));
        }

        return Ok(SenderSession {
            socket,
            destination,
            timeout: config.timeout() as u64,
            attempts: config.attempts(),
        });
    }

    /// Drive the whole transfer: name frame, data frames, end frame.
    /// Each frame is acknowledged before the next one is sent.
    pub fn run_transfer(&self, path: &str, log: &dyn Loggable) -> Result<(), String> {
        self.send_file_name(path, log)?;
        let transferred = self.send_file(path, log)?;
        self.send_reliably(&Frame::End, transferred, log)?;
        log.vlog(&format!("Transfer of {} finished, {}b of data", path, transferred));
        return Ok(());
    }

    /// Announce the file under its base name, directories on this machine
    /// mean nothing to the receiver.
    pub fn send_file_name(&self, path: &str, log: &dyn Loggable) -> Result<(), String> {
        let name = Path::new(path).file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path);
        self.send_reliably(&Frame::Name(name.as_bytes()), 0, log)?;
        return Ok(());
    }

    /// Send the file content in chunks, every chunk acknowledged before the
    /// next one is read. Returns how many bytes the file had.
    pub fn send_file(&self, path: &str, log: &dyn Loggable) -> Result<usize, String> {
        let mut input_file = File::open(path)
            .map_err(|e| format!("Can't open file {}: {}", path, e))?;
        log.vlog(&format!("File {} opened", path));

        let mut buffer = vec![0; CHUNK_SIZE];
        let mut offset = 0;
        loop {
            let size = input_file.read(buffer.as_mut_slice())
                .map_err(|e| format!("Can't read file {}: {}", path, e))?;
            if size == 0 {
                break;
            }
            log.vlog(&format!("Read {}b of data from file", size));
            self.send_reliably(&Frame::Data(&buffer[..size]), offset, log)?;
            offset += size;
        }
        return Ok(offset);
    }

    /// Transmit a single frame until the receiver acknowledges it. The wait
    /// for the acknowledgment doubles with every failed attempt. Returns how
    /// many transmissions the frame needed, or an error once the attempts are
    /// exhausted. The `offset` is carried for diagnostics only.
    pub fn send_reliably(&self, frame: &Frame, offset: usize, log: &dyn Loggable) -> Result<u32, String> {
        let payload = frame.payload();
        let mut ack_buffer = vec![0; BUFFER_SIZE];

        for attempt in 0..self.attempts {
            let wait = backoff(self.timeout, attempt);
            self.socket.set_read_timeout(Some(Duration::from_millis(wait)))
                .map_err(|e| format!("Can't set timeout on the socket: {}", e))?;

            let sent = self.socket.send_to(payload, self.destination)
                .map_err(|e| format!("Can't send {} frame: {}", frame.label(), e))?;
            log.vlog(&format!("Send {}b {} frame at offset {} to {}", sent, frame.label(), offset, self.destination));

            // wait for the acknowledgment, other datagrams don't end the attempt
            loop {
                match recv_with_timeout(&self.socket, ack_buffer.as_mut_slice(), Box::new(log)) {
                    Ok((size, from)) => {
                        if is_ack(&ack_buffer[..size]) {
                            log.vlog(&format!("Acknowledgment of {} frame at offset {}", frame.label(), offset));
                            return Ok(attempt + 1);
                        }
                        log.vlog(&format!("Unexpected answer {}b from {}: {}, ignoring", size, from, to_hex(&ack_buffer[..size])));
                    }
                    Err(ref e) if is_timeout(e) => {
                        log.log(&format!("No acknowledgment of {} frame at offset {} within {}ms", frame.label(), offset, wait));
                        break;
                    }
                    Err(e) => {
                        return Err(format!("Can't receive acknowledgment: {}", e));
                    }
                }
            }
        }

        return Err(format!(
            "No acknowledgment of {} frame at offset {} after {} attempts",
            frame.label(), offset, self.attempts
        ));
    }
}

/// How long to wait for the acknowledgment of the given attempt.
fn backoff(timeout: u64, attempt: u32) -> u64 {
    return timeout * (1u64 << min(attempt, MAX_BACKOFF_DOUBLING));
}

fn to_hex(data: &[u8]) -> String {
    return data.iter()
        .map(|num| format!("{:02x}", num))
        .intersperse(String::from(" "))
        .collect();
}
