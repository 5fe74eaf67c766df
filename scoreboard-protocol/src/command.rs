//! Remote commands
//!
//! Each command is one line, `NAME` or `NAME=ARGS`. Names are upper case;
//! surrounding whitespace is ignored. Numeric arguments that the board
//! saturates anyway (score, brightness) are passed through as signed
//! integers; the time of day is validated here.

/// Errors parsing a command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// No command with that name
    Unknown,
    /// Command needs an argument
    MissingArgument,
    /// Command takes no argument
    UnexpectedArgument,
    /// Argument is not a number
    InvalidNumber,
    /// Number outside the accepted range
    OutOfRange,
    /// Argument is not one of the accepted words
    InvalidValue,
}

/// How the board cycles between items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewStyle {
    Scroll,
    Alternate,
}

/// A parsed remote command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `SET_SCORE=<left>:<right>`
    SetScore { left: i32, right: i32 },
    /// `SET_TIME=<hh>:<mm>`
    SetTime { hours: u8, minutes: u8 },
    /// `SET_BRIGHTNESS=<level>`
    SetBrightness(i32),
    /// `SET_VIEW=SCROLL|ALTERNATE`
    SetView(ViewStyle),
    /// `SHOW_SCORE=0|1`
    ShowScore(bool),
    /// `SHOW_TIME=0|1`
    ShowTime(bool),
    /// `DISPLAY=ON|OFF`
    Display(bool),
    /// `REINIT`
    Reinit,
    /// `GET_SCORE`
    GetScore,
    /// `GET_CONFIG`
    GetConfig,
}

/// Separator between the two numbers of a pair argument
pub const PAIR_DELIMITER: char = ':';

impl Command {
    /// Parse one line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, arg) = match line.split_once('=') {
            Some((name, arg)) => (name.trim_end(), Some(arg.trim())),
            None => (line, None),
        };

        match name {
            "SET_SCORE" => {
                let (left, right) = parse_pair(required(arg)?)?;
                Ok(Command::SetScore { left, right })
            }
            "SET_TIME" => {
                let (hours, minutes) = parse_pair(required(arg)?)?;
                if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
                    return Err(CommandError::OutOfRange);
                }
                Ok(Command::SetTime {
                    hours: hours as u8,
                    minutes: minutes as u8,
                })
            }
            "SET_BRIGHTNESS" => Ok(Command::SetBrightness(parse_number(required(arg)?)?)),
            "SET_VIEW" => match required(arg)? {
                "SCROLL" => Ok(Command::SetView(ViewStyle::Scroll)),
                "ALTERNATE" => Ok(Command::SetView(ViewStyle::Alternate)),
                _ => Err(CommandError::InvalidValue),
            },
            "SHOW_SCORE" => Ok(Command::ShowScore(parse_flag(required(arg)?)?)),
            "SHOW_TIME" => Ok(Command::ShowTime(parse_flag(required(arg)?)?)),
            "DISPLAY" => match required(arg)? {
                "ON" => Ok(Command::Display(true)),
                "OFF" => Ok(Command::Display(false)),
                _ => Err(CommandError::InvalidValue),
            },
            "REINIT" => no_argument(arg, Command::Reinit),
            "GET_SCORE" => no_argument(arg, Command::GetScore),
            "GET_CONFIG" => no_argument(arg, Command::GetConfig),
            _ => Err(CommandError::Unknown),
        }
    }
}

fn required(arg: Option<&str>) -> Result<&str, CommandError> {
    match arg {
        Some(arg) if !arg.is_empty() => Ok(arg),
        _ => Err(CommandError::MissingArgument),
    }
}

fn no_argument(arg: Option<&str>, command: Command) -> Result<Command, CommandError> {
    match arg {
        None => Ok(command),
        Some(_) => Err(CommandError::UnexpectedArgument),
    }
}

fn parse_number(text: &str) -> Result<i32, CommandError> {
    text.trim().parse().map_err(|_| CommandError::InvalidNumber)
}

fn parse_pair(text: &str) -> Result<(i32, i32), CommandError> {
    let (first, second) = text
        .split_once(PAIR_DELIMITER)
        .ok_or(CommandError::MissingArgument)?;
    Ok((parse_number(first)?, parse_number(second)?))
}

fn parse_flag(text: &str) -> Result<bool, CommandError> {
    match text {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(CommandError::InvalidValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_score() {
        assert_eq!(
            Command::parse("SET_SCORE=3:12"),
            Ok(Command::SetScore { left: 3, right: 12 })
        );
        // Out-of-range scores are left for the model to saturate
        assert_eq!(
            Command::parse("SET_SCORE=-4:150"),
            Ok(Command::SetScore {
                left: -4,
                right: 150
            })
        );
        assert_eq!(
            Command::parse(" SET_SCORE = 1 : 2 "),
            Ok(Command::SetScore { left: 1, right: 2 })
        );
    }

    #[test]
    fn test_set_score_errors() {
        assert_eq!(Command::parse("SET_SCORE"), Err(CommandError::MissingArgument));
        assert_eq!(Command::parse("SET_SCORE="), Err(CommandError::MissingArgument));
        assert_eq!(Command::parse("SET_SCORE=7"), Err(CommandError::MissingArgument));
        assert_eq!(Command::parse("SET_SCORE=a:1"), Err(CommandError::InvalidNumber));
        assert_eq!(Command::parse("SET_SCORE=1:2:3"), Err(CommandError::InvalidNumber));
    }

    #[test]
    fn test_set_time_range() {
        assert_eq!(
            Command::parse("SET_TIME=23:59"),
            Ok(Command::SetTime {
                hours: 23,
                minutes: 59
            })
        );
        assert_eq!(
            Command::parse("SET_TIME=07:05"),
            Ok(Command::SetTime {
                hours: 7,
                minutes: 5
            })
        );
        assert_eq!(Command::parse("SET_TIME=24:00"), Err(CommandError::OutOfRange));
        assert_eq!(Command::parse("SET_TIME=12:60"), Err(CommandError::OutOfRange));
        assert_eq!(Command::parse("SET_TIME=-1:00"), Err(CommandError::OutOfRange));
    }

    #[test]
    fn test_config_commands() {
        assert_eq!(Command::parse("SET_BRIGHTNESS=20"), Ok(Command::SetBrightness(20)));
        assert_eq!(
            Command::parse("SET_VIEW=SCROLL"),
            Ok(Command::SetView(ViewStyle::Scroll))
        );
        assert_eq!(
            Command::parse("SET_VIEW=ALTERNATE"),
            Ok(Command::SetView(ViewStyle::Alternate))
        );
        assert_eq!(Command::parse("SET_VIEW=spin"), Err(CommandError::InvalidValue));
        assert_eq!(Command::parse("SHOW_SCORE=0"), Ok(Command::ShowScore(false)));
        assert_eq!(Command::parse("SHOW_TIME=1"), Ok(Command::ShowTime(true)));
        assert_eq!(Command::parse("SHOW_TIME=yes"), Err(CommandError::InvalidValue));
    }

    #[test]
    fn test_plain_commands() {
        assert_eq!(Command::parse("DISPLAY=OFF"), Ok(Command::Display(false)));
        assert_eq!(Command::parse("DISPLAY=ON"), Ok(Command::Display(true)));
        assert_eq!(Command::parse("REINIT"), Ok(Command::Reinit));
        assert_eq!(Command::parse("REINIT=1"), Err(CommandError::UnexpectedArgument));
        assert_eq!(Command::parse("GET_SCORE"), Ok(Command::GetScore));
        assert_eq!(Command::parse("GET_CONFIG"), Ok(Command::GetConfig));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(Command::parse(""), Err(CommandError::Unknown));
        assert_eq!(Command::parse("set_score=1:2"), Err(CommandError::Unknown));
        assert_eq!(Command::parse("RESET"), Err(CommandError::Unknown));
    }

    proptest! {
        #[test]
        fn prop_parse_never_panics(line in "\\PC{0,40}") {
            let _ = Command::parse(&line);
        }

        #[test]
        fn prop_any_score_pair_parses(left in any::<i32>(), right in any::<i32>()) {
            let line = format!("SET_SCORE={}:{}", left, right);
            prop_assert_eq!(Command::parse(&line), Ok(Command::SetScore { left, right }));
        }
    }
}
