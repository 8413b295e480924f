use super::config::Config;
use super::session::SenderSession;
use crate::Loggable;

pub fn logic(config: Config) -> Result<(), String> {
    let session = SenderSession::connect(&config)?;
    session.run_transfer(config.filename(), &config)?;
    println!("File {} transferred to {}", config.filename(), config.recv_addr());
    return Ok(());
}
