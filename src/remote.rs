//! Decoding of raw receiver tokens into remote buttons.
//!
//! The receiver firmware prints each NEC-style 32-bit code as eight
//! uppercase hex digits on its own line. Decoding is an exact match over
//! that fixed table; anything else, including the empty string, is
//! [`Button::Unknown`].

use std::fmt;

/// One button on the infrared remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Power,
    VolUp,
    VolDown,
    Up,
    Down,
    Func,
    Rewind,
    Pause,
    FastForward,
    Eq,
    Rept,
    Digit(u8),
    Unknown,
}

/// Map a trimmed input token to its button. Total function; unmatched
/// input decodes to [`Button::Unknown`] and the caller keeps the raw
/// token for diagnostics.
pub fn decode(token: &str) -> Button {
    match token {
        "BA45FF00" => Button::Power,
        "B946FF00" => Button::VolUp,
        "B847FF00" => Button::Func,
        "BB44FF00" => Button::Rewind,
        "BF40FF00" => Button::Pause,
        "BC43FF00" => Button::FastForward,
        "F807FF00" => Button::Down,
        "EA15FF00" => Button::VolDown,
        "F609FF00" => Button::Up,
        "E916FF00" => Button::Digit(0),
        "E619FF00" => Button::Eq,
        "F20DFF00" => Button::Rept,
        "F30CFF00" => Button::Digit(1),
        "E718FF00" => Button::Digit(2),
        "A15EFF00" => Button::Digit(3),
        "F708FF00" => Button::Digit(4),
        "E31CFF00" => Button::Digit(5),
        "A55AFF00" => Button::Digit(6),
        "BD42FF00" => Button::Digit(7),
        "AD52FF00" => Button::Digit(8),
        "B54AFF00" => Button::Digit(9),
        _ => Button::Unknown,
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Button::Power => write!(f, "POWER"),
            Button::VolUp => write!(f, "VOL_UP"),
            Button::VolDown => write!(f, "VOL_DOWN"),
            Button::Up => write!(f, "UP"),
            Button::Down => write!(f, "DOWN"),
            Button::Func => write!(f, "FUNC"),
            Button::Rewind => write!(f, "REWIND"),
            Button::Pause => write!(f, "PAUSE"),
            Button::FastForward => write!(f, "FAST_FORWARD"),
            Button::Eq => write!(f, "EQ"),
            Button::Rept => write!(f, "REPT"),
            Button::Digit(n) => write!(f, "BTN_{n}"),
            Button::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
