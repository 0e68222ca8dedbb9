//! Text control interface
//!
//! Lets an external process drive a session with one command per line:
//!
//! ```text
//! click <client_x> <client_y>
//! edit <a> <b> <c>
//! redraw
//! ```
//!
//! Blank lines and lines starting with `#` carry no command.

use std::str::FromStr;

use thiserror::Error;

use crate::session::messages::Msg;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{command} expects {expected} arguments, got {got}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid coordinate {0:?}")]
    InvalidCoordinate(String),
}

/// Parse one control line; `Ok(None)` for blank and comment lines
pub fn parse_line(line: &str) -> Result<Option<Msg>, ControlError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    line.parse().map(Some)
}

impl FromStr for Msg {
    type Err = ControlError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let arity = |command: &'static str, expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(ControlError::WrongArity {
                    command,
                    expected,
                    got: args.len(),
                })
            }
        };

        match command {
            "click" => {
                arity("click", 2)?;
                Ok(Msg::Click {
                    client_x: parse_coordinate(args[0])?,
                    client_y: parse_coordinate(args[1])?,
                })
            }
            // values stay text: the edit form does its own validation
            "edit" => {
                arity("edit", 3)?;
                Ok(Msg::EditCoefficients([
                    args[0].to_string(),
                    args[1].to_string(),
                    args[2].to_string(),
                ]))
            }
            "redraw" => {
                arity("redraw", 0)?;
                Ok(Msg::Redraw)
            }
            other => Err(ControlError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_coordinate(text: &str) -> Result<f64, ControlError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ControlError::InvalidCoordinate(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_line("click 540 270.5"),
            Ok(Some(Msg::Click {
                client_x: 540.0,
                client_y: 270.5
            }))
        );
        assert_eq!(
            parse_line("  edit 1 x 3 "),
            Ok(Some(Msg::EditCoefficients([
                "1".to_string(),
                "x".to_string(),
                "3".to_string()
            ])))
        );
        assert_eq!(parse_line("redraw"), Ok(Some(Msg::Redraw)));
    }

    #[test]
    fn test_skip_blank_and_comments() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   # three clicks follow"), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_line("zoom 2"),
            Err(ControlError::UnknownCommand("zoom".to_string()))
        );
        assert_eq!(
            parse_line("click 1"),
            Err(ControlError::WrongArity {
                command: "click",
                expected: 2,
                got: 1
            })
        );
        assert_eq!(
            parse_line("click 1 nan"),
            Err(ControlError::InvalidCoordinate("nan".to_string()))
        );
    }
}
