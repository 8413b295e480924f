use rudp_sender::sender::config::Config;
use rudp_sender::sender::logic::logic;

fn main() {
    let config = Config::from_command_line();
    let is_verbose = config.is_verbose();

    if let Err(e) = logic(config) {
        eprintln!("Ending program because of error");
        if is_verbose {
            eprintln!("{}", e);
        }
    }
}
