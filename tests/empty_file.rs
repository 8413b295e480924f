use rudp_sender::sender::config::Config;
use rudp_sender::sender::logic::logic;
use std::fs::{remove_file, File};
use std::net::UdpSocket;
use std::thread;

#[test]
fn empty_file_sends_name_and_end_only() {
    const SOURCE_FILE: &str = "empty_source.txt";

    // create empty file
    {
        match remove_file(SOURCE_FILE) { _ => {} };
        File::create(SOURCE_FILE).unwrap();
    }

    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    let recv_addr = socket.local_addr().unwrap().to_string();

    let receiver = thread::Builder::new().name(String::from("Receiver")).spawn(move || {
        let mut buffer = vec![0; 2048];
        let mut frames: Vec<Vec<u8>> = Vec::new();
        loop {
            let (size, from) = socket.recv_from(&mut buffer).unwrap();
            frames.push(Vec::from(&buffer[..size]));
            socket.send_to(b"ACK", from).unwrap();
            if &buffer[..size] == b"END" {
                break;
            }
        }
        return frames;
    }).unwrap();

    let config = Config {
        verbose: false,
        bind_addr: String::from("127.0.0.1:0"),
        recv_addr,
        file: String::from(SOURCE_FILE),
        timeout: 3000,
        attempts: 10,
    };
    logic(config).unwrap();

    // no data frames for an empty file
    let frames = receiver.join().unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], SOURCE_FILE.as_bytes());
    assert_eq!(frames[1], b"END");

    remove_file(SOURCE_FILE).unwrap();
}
