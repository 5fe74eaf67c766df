//! Line framing for the command stream
//!
//! Commands are ASCII lines terminated by CR, LF or CR LF. Empty lines are
//! skipped. A line longer than [`MAX_LINE_LEN`] is reported once and the
//! rest of it is dropped up to the next terminator.

use heapless::String;

/// Longest accepted line, without terminator
pub const MAX_LINE_LEN: usize = 32;

/// One received line
pub type Line = String<MAX_LINE_LEN>;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Errors reported while assembling lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded [`MAX_LINE_LEN`]; input is skipped to the next terminator
    TooLong,
    /// Line contained bytes outside ASCII
    NotAscii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssembleState {
    /// Collecting bytes of a line
    Collecting,
    /// Dropping the tail of an over-long line
    Discarding,
}

/// Byte-at-a-time line splitter
#[derive(Debug, Clone)]
pub struct LineAssembler {
    state: AssembleState,
    buffer: heapless::Vec<u8, MAX_LINE_LEN>,
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl LineAssembler {
    pub const fn new() -> Self {
        Self {
            state: AssembleState::Collecting,
            buffer: heapless::Vec::new(),
        }
    }

    /// Drop any partial line
    pub fn reset(&mut self) {
        self.state = AssembleState::Collecting;
        self.buffer.clear();
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` on a terminator ending a non-empty line,
    /// `Ok(None)` while more bytes are needed, or `Err` when a line is
    /// rejected.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        let terminator = byte == CR || byte == LF;

        match self.state {
            AssembleState::Discarding => {
                if terminator {
                    self.reset();
                }
                Ok(None)
            }
            AssembleState::Collecting if terminator => {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                let line = self.take_line();
                self.reset();
                line.map(Some)
            }
            AssembleState::Collecting => {
                if self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    self.state = AssembleState::Discarding;
                    return Err(LineError::TooLong);
                }
                Ok(None)
            }
        }
    }

    /// Feed bytes until one line completes or fails
    ///
    /// Returns the outcome together with the number of bytes consumed, so
    /// the caller can feed the remainder afterwards.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> (Result<Option<Line>, LineError>, usize) {
        for (i, &byte) in bytes.iter().enumerate() {
            match self.feed(byte) {
                Ok(None) => continue,
                outcome => return (outcome, i + 1),
            }
        }
        (Ok(None), bytes.len())
    }

    fn take_line(&self) -> Result<Line, LineError> {
        if !self.buffer.is_ascii() {
            return Err(LineError::NotAscii);
        }
        let text = core::str::from_utf8(&self.buffer).map_err(|_| LineError::NotAscii)?;
        let mut line = Line::new();
        line.push_str(text).map_err(|_| LineError::TooLong)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn feed_all(
        assembler: &mut LineAssembler,
        bytes: &[u8],
    ) -> std::vec::Vec<Result<Line, LineError>> {
        let mut out = std::vec::Vec::new();
        for &byte in bytes {
            match assembler.feed(byte) {
                Ok(Some(line)) => out.push(Ok(line)),
                Ok(None) => {}
                Err(e) => out.push(Err(e)),
            }
        }
        out
    }

    #[test]
    fn test_crlf_and_bare_terminators() {
        let mut assembler = LineAssembler::new();
        let lines = feed_all(&mut assembler, b"GET_SCORE\r\nREINIT\nDISPLAY=ON\r");

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].as_deref(), Ok("GET_SCORE"));
        assert_eq!(lines[1].as_deref(), Ok("REINIT"));
        assert_eq!(lines[2].as_deref(), Ok("DISPLAY=ON"));
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let mut assembler = LineAssembler::new();
        let lines = feed_all(&mut assembler, b"\r\n\r\n\nOK\r\n");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_partial_line_waits() {
        let mut assembler = LineAssembler::new();
        assert_eq!(assembler.feed_bytes(b"SET_SC"), (Ok(None), 6));

        let (outcome, used) = assembler.feed_bytes(b"ORE=1:2\r\nGET");
        assert_eq!(used, 8);
        assert_eq!(outcome.unwrap().unwrap().as_str(), "SET_SCORE=1:2");
    }

    #[test]
    fn test_overlong_line_resyncs() {
        let mut assembler = LineAssembler::new();
        let mut data = std::vec::Vec::new();
        data.extend_from_slice(&[b'X'; MAX_LINE_LEN + 10]);
        data.extend_from_slice(b"\r\nGET_CONFIG\r\n");

        let lines = feed_all(&mut assembler, &data);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], Err(LineError::TooLong));
        assert_eq!(lines[1].as_deref(), Ok("GET_CONFIG"));
    }

    #[test]
    fn test_exactly_max_len_is_accepted() {
        let mut assembler = LineAssembler::new();
        let mut data = std::vec::Vec::new();
        data.extend_from_slice(&[b'A'; MAX_LINE_LEN]);
        data.push(b'\n');

        let lines = feed_all(&mut assembler, &data);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].as_ref().map(|l| l.len()), Ok(MAX_LINE_LEN));
    }

    #[test]
    fn test_non_ascii_rejected() {
        let mut assembler = LineAssembler::new();
        let lines = feed_all(&mut assembler, b"SET\xC3\xA9\r\nREINIT\r\n");
        assert_eq!(lines[0], Err(LineError::NotAscii));
        assert_eq!(lines[1].as_deref(), Ok("REINIT"));
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_limit(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let mut assembler = LineAssembler::new();
            for line in feed_all(&mut assembler, &bytes).into_iter().flatten() {
                prop_assert!(!line.is_empty());
                prop_assert!(line.len() <= MAX_LINE_LEN);
                prop_assert!(!line.contains('\r') && !line.contains('\n'));
            }
        }

        #[test]
        fn prop_recovers_after_noise(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            let mut assembler = LineAssembler::new();
            let _ = feed_all(&mut assembler, &bytes);
            let lines = feed_all(&mut assembler, b"\nGET_SCORE\n");
            prop_assert_eq!(lines.last().map(|l| l.as_deref()), Some(Ok("GET_SCORE")));
        }
    }
}
