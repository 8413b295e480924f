use argparse::{ArgumentParser, StoreTrue, Store};
use crate::Loggable;

pub struct Config {
    pub verbose: bool,
    pub bind_addr: String,
    pub recv_addr: String,
    pub file: String,
    pub timeout: u32,
    pub attempts: u32,
}

impl Config {
    pub fn new() -> Self {
        return Config {
            verbose: false,
            bind_addr: String::from("0.0.0.0:0"),
            recv_addr: String::from("127.0.0.1:3001"),
            file: String::from("input.txt"),
            timeout: 3000,
            attempts: 10,
        };
    }

    pub fn bind_addr(&self) -> &str {
        return &self.bind_addr;
    }

    pub fn recv_addr(&self) -> &str {
        return &self.recv_addr;
    }

    pub fn filename(&self) -> &str {
        return &self.file;
    }

    pub fn timeout(&self) -> u32 {
        return self.timeout;
    }

    pub fn attempts(&self) -> u32 {
        return self.attempts;
    }

    pub fn is_verbose(&self) -> bool {
        return self.verbose;
    }

    pub fn from_command_line() -> Self {
        let mut config = Config::new();
        {
            let mut parser = ArgumentParser::new();
            parser.refer(&mut config.verbose)
                .add_option(&["-v", "--verbose"], StoreTrue, "Verbose output");
            parser.refer(&mut config.recv_addr)
                .add_option(&["-r", "--receiver"], Store, "Address of the receiver in format host:port")
                .required();
            parser.refer(&mut config.file)
                .add_option(&["-f", "--file"], Store, "File to send")
                .required();
            parser.refer(&mut config.bind_addr)
                .add_option(&["--bind"], Store, "Address to bind to in format IP:port");
            parser.refer(&mut config.attempts)
                .add_option(&["-a", "--attempts"], Store, "How many times to transmit a frame before giving up");
            parser.parse_args_or_exit();
        }
        return config;
    }
}

impl Loggable for Config {
    fn is_verbose(&self) -> bool {
        return self.verbose;
    }
}
