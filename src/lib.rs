const DATE_FORMAT_STR: &'static str = "%Y-%m-%d %H:%M:%S.%N";
const BUFFER_SIZE: usize = 1024;

mod loggable;
use loggable::Loggable;

pub mod frame;

mod socket_manipulation;
pub use socket_manipulation::{is_timeout, recv_with_timeout};

pub mod sender;
