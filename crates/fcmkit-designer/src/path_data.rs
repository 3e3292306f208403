//! # Path Data Parser
//!
//! Tokenizes the SVG path-data mini-language (`d` attribute) into an ordered
//! list of [`DrawCommand`]s.
//!
//! Scanning works letter to letter: when a command letter is found, the text
//! since the previous letter is parsed as that letter's arguments. Numbers are
//! separated by whitespace and/or commas; a sign that follows a digit also
//! starts a new number (`10-5` is two numbers), except in an exponent.

use fcmkit_core::ParseError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Draw command type, one per path-data letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Move,
    Line,
    HorizontalLine,
    VerticalLine,
    CubicBezier,
    SmoothCubicBezier,
    QuadraticBezier,
    SmoothQuadraticBezier,
    Arc,
    Close,
}

impl CommandKind {
    /// Look up a command letter, either case
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'M' => Some(Self::Move),
            'L' => Some(Self::Line),
            'H' => Some(Self::HorizontalLine),
            'V' => Some(Self::VerticalLine),
            'C' => Some(Self::CubicBezier),
            'S' => Some(Self::SmoothCubicBezier),
            'Q' => Some(Self::QuadraticBezier),
            'T' => Some(Self::SmoothQuadraticBezier),
            'A' => Some(Self::Arc),
            'Z' => Some(Self::Close),
            _ => None,
        }
    }

    /// Upper-case (absolute) letter
    pub fn letter(self) -> char {
        match self {
            Self::Move => 'M',
            Self::Line => 'L',
            Self::HorizontalLine => 'H',
            Self::VerticalLine => 'V',
            Self::CubicBezier => 'C',
            Self::SmoothCubicBezier => 'S',
            Self::QuadraticBezier => 'Q',
            Self::SmoothQuadraticBezier => 'T',
            Self::Arc => 'A',
            Self::Close => 'Z',
        }
    }

    /// Number of arguments consumed per invocation
    pub fn arity(self) -> usize {
        match self {
            Self::Move | Self::Line | Self::SmoothQuadraticBezier => 2,
            Self::HorizontalLine | Self::VerticalLine => 1,
            Self::CubicBezier => 6,
            Self::SmoothCubicBezier | Self::QuadraticBezier => 4,
            Self::Arc => 7,
            Self::Close => 0,
        }
    }
}

/// One command letter with its arguments
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub kind: CommandKind,
    /// Upper-case letter; relative commands resolve against the current point
    pub absolute: bool,
    pub arguments: Vec<f64>,
}

impl DrawCommand {
    pub fn new(kind: CommandKind, absolute: bool, arguments: Vec<f64>) -> Self {
        Self {
            kind,
            absolute,
            arguments,
        }
    }

    /// Letter as written: upper case when absolute
    pub fn letter(&self) -> char {
        if self.absolute {
            self.kind.letter()
        } else {
            self.kind.letter().to_ascii_lowercase()
        }
    }

    /// Complete argument groups. An incomplete trailing group is skipped.
    pub fn groups(&self) -> std::slice::ChunksExact<'_, f64> {
        self.arguments.chunks_exact(self.kind.arity().max(1))
    }

    fn parse(letter: char, text: &str) -> Result<Self, ParseError> {
        let kind = CommandKind::from_letter(letter).ok_or(ParseError::UnexpectedCharacter {
            character: letter,
            offset: 0,
        })?;

        let arguments = split_numbers(text)
            .into_iter()
            .map(|token| {
                token
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| ParseError::InvalidNumber {
                        command: letter,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let command = Self::new(kind, letter.is_ascii_uppercase(), arguments);
        let arity = kind.arity();
        if arity > 0 && command.arguments.len() % arity != 0 {
            debug!(
                command = %letter,
                count = command.arguments.len(),
                "Ignoring incomplete trailing argument group"
            );
        }
        Ok(command)
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        for argument in &self.arguments {
            write!(f, " {}", argument)?;
        }
        Ok(())
    }
}

/// Parsed path data of one `<path>` element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    pub commands: Vec<DrawCommand>,
}

impl PathData {
    pub fn new(commands: Vec<DrawCommand>) -> Self {
        Self { commands }
    }

    /// Parse path-data text
    pub fn parse(data: &str) -> Result<Self, ParseError> {
        let mut commands = Vec::new();
        let mut pending: Option<(usize, char)> = None;

        for (offset, character) in data.char_indices() {
            if CommandKind::from_letter(character).is_some() {
                if let Some((start, letter)) = pending {
                    commands.push(DrawCommand::parse(letter, &data[start..offset])?);
                }
                pending = Some((offset + character.len_utf8(), character));
            } else if pending.is_none() && !character.is_whitespace() {
                return Err(ParseError::UnexpectedCharacter { character, offset });
            }
        }

        if let Some((start, letter)) = pending {
            commands.push(DrawCommand::parse(letter, &data[start..])?);
        }

        Ok(Self { commands })
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromStr for PathData {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

fn split_numbers(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    let mut previous: Option<char> = None;

    for (offset, character) in text.char_indices() {
        match character {
            ',' => {
                if let Some(begin) = start.take() {
                    tokens.push(&text[begin..offset]);
                }
            }
            c if c.is_whitespace() => {
                if let Some(begin) = start.take() {
                    tokens.push(&text[begin..offset]);
                }
            }
            '-' | '+' => {
                if let Some(begin) = start {
                    if !matches!(previous, Some('e' | 'E')) {
                        tokens.push(&text[begin..offset]);
                        start = Some(offset);
                    }
                } else {
                    start = Some(offset);
                }
            }
            _ => {
                if start.is_none() {
                    start = Some(offset);
                }
            }
        }
        previous = Some(character);
    }

    if let Some(begin) = start {
        tokens.push(&text[begin..]);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_and_relative() {
        let data = PathData::parse("M 0 0 l 10,0 L10 10 z").unwrap();
        assert_eq!(data.commands.len(), 4);
        assert_eq!(data.commands[0].kind, CommandKind::Move);
        assert!(data.commands[0].absolute);
        assert_eq!(data.commands[1].kind, CommandKind::Line);
        assert!(!data.commands[1].absolute);
        assert_eq!(data.commands[1].arguments, vec![10.0, 0.0]);
        assert_eq!(data.commands[2].arguments, vec![10.0, 10.0]);
        assert_eq!(data.commands[3].kind, CommandKind::Close);
        assert!(data.commands[3].arguments.is_empty());
    }

    #[test]
    fn test_repeated_groups_stay_with_letter() {
        let data = PathData::parse("M0 0 L 1 1 2 2 3 3").unwrap();
        assert_eq!(data.commands.len(), 2);
        assert_eq!(data.commands[1].groups().count(), 3);
    }

    #[test]
    fn test_compact_signs_and_exponents() {
        let data = PathData::parse("M10-5L1e-2,-3.5+2").unwrap();
        assert_eq!(data.commands[0].arguments, vec![10.0, -5.0]);
        assert_eq!(data.commands[1].arguments, vec![0.01, -3.5, 2.0]);
    }

    #[test]
    fn test_leading_whitespace_is_allowed() {
        let data = PathData::parse("  \n M 1 2").unwrap();
        assert_eq!(data.commands.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(PathData::parse("").unwrap().is_empty());
        assert!(PathData::parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_leading_character() {
        let err = PathData::parse("X 1 2").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedCharacter {
                character: 'X',
                offset: 0
            }
        );

        let err = PathData::parse("1 2 M 0 0").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedCharacter { character: '1', .. }
        ));
    }

    #[test]
    fn test_invalid_number() {
        let err = PathData::parse("M 0 0 L 1.2.3 4").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                command: 'L',
                token: "1.2.3".to_string()
            }
        );
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        assert!(PathData::parse("M inf 0").is_err());
    }

    #[test]
    fn test_incomplete_group_is_skipped() {
        let data = PathData::parse("M 0 0 C 1 2 3 4 5 6 7").unwrap();
        let cubic = &data.commands[1];
        assert_eq!(cubic.arguments.len(), 7);
        assert_eq!(cubic.groups().count(), 1);
    }

    #[test]
    fn test_display_round_trip() {
        let text = "M 0 0 c 1 2 3 4 5 6 Z";
        let data = PathData::parse(text).unwrap();
        assert_eq!(data.to_string(), text);
        assert_eq!(data.to_string().parse::<PathData>().unwrap(), data);
    }

    #[test]
    fn test_arity_table() {
        assert_eq!(CommandKind::Arc.arity(), 7);
        assert_eq!(CommandKind::SmoothQuadraticBezier.arity(), 2);
        assert_eq!(CommandKind::from_letter('s'), Some(CommandKind::SmoothCubicBezier));
        assert_eq!(CommandKind::from_letter('e'), None);
    }
}
