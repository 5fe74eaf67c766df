//! Replies sent back to the remote

use core::fmt::Write;

use heapless::String;

/// Longest reply, terminator included
pub const MAX_REPLY_LEN: usize = 32;

/// One encoded reply line
pub type ReplyLine = String<MAX_REPLY_LEN>;

/// Answer to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reply {
    /// Command accepted
    Ok,
    /// Command rejected
    Err,
    /// `SCORE=<left>:<right>`
    Score { left: u8, right: u8 },
    /// `CONFIG=<score>:<time>:<scroll>:<brightness>`, flags as 0/1
    Config {
        use_score: bool,
        use_time: bool,
        scroll: bool,
        brightness: u8,
    },
}

impl Reply {
    /// Format the reply, CR LF terminated
    pub fn encode(&self) -> ReplyLine {
        let mut line = ReplyLine::new();
        // Every variant fits MAX_REPLY_LEN
        let _ = match *self {
            Reply::Ok => line.write_str("OK\r\n"),
            Reply::Err => line.write_str("ERR\r\n"),
            Reply::Score { left, right } => write!(line, "SCORE={}:{}\r\n", left, right),
            Reply::Config {
                use_score,
                use_time,
                scroll,
                brightness,
            } => write!(
                line,
                "CONFIG={}:{}:{}:{}\r\n",
                use_score as u8, use_time as u8, scroll as u8, brightness
            ),
        };
        line
    }

    /// Acknowledge an outcome
    pub fn from_outcome<T, E>(outcome: &Result<T, E>) -> Self {
        match outcome {
            Ok(_) => Reply::Ok,
            Err(_) => Reply::Err,
        }
    }
}
