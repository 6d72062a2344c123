mod cli;
mod error;
mod file_handler;
mod logger;
mod orchestrator;

pub use cli::{RankCli, TemplateCli};
pub use error::{AppError, ErrorKind};
pub use orchestrator::{run_ranker, run_templater};

// Macros for use by child modules of app (orchestrator, file_handler).
// They forward to app::logger, which drops the message when no log file was
// requested. `super::logger` resolves because the macros expand inside
// sibling modules of `logger`.
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        super::logger::log_verbose_message_args(format_args!($($arg)*))
    };
}

macro_rules! verbose_eprintln {
    ($($arg:tt)*) => {
        super::logger::log_verbose_error_args(format_args!($($arg)*))
    };
}

use verbose_eprintln;
use verbose_println;
