use time::OffsetDateTime;
use crate::DATE_FORMAT_STR;

///Trait to allow logging for the configs
pub trait Loggable {
    fn is_verbose(&self) -> bool;

    /// Print the message with timestamp regardless of verbosity.
    fn log(&self, text: &str) -> () {
        println!("{}: {}", OffsetDateTime::now_utc().format(DATE_FORMAT_STR), text);
    }

    fn vlog(&self, text: &str) -> () {
        if self.is_verbose() {
            self.log(text);
        }
    }
}
