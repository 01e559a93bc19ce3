use thiserror::Error;

use super::CliFlags;
use crate::pass::CharClass;
use crate::pass::charset::UnknownClass;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error(transparent)]
    UnknownClass(#[from] UnknownClass),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-i" | "--interactive" => flags.interactive = true,
            "-b" | "--board" => flags.clipboard = true,
            "--thread-rng" => flags.thread_rng = true,
            "--no-digits" => flags.no_digits = true,
            "-d" | "--digits" => flags.extra_classes.push(CharClass::Numbers),
            "-a" | "--lower" => flags.extra_classes.push(CharClass::Lowercase),
            "-A" | "--upper" => flags.extra_classes.push(CharClass::Uppercase),
            "-p" | "--punct" => flags.extra_classes.push(CharClass::Punctuation),
            "-l" | "--length" => {
                let value = value_for(args, &mut i)?;
                flags.length = Some(parse_number(value)?);
            }
            "-n" | "--number" => {
                let value = value_for(args, &mut i)?;
                flags.number = Some(parse_number(value)?);
            }
            "--seed" => {
                let value = value_for(args, &mut i)?;
                flags.seed = Some(parse_number(value)?);
            }
            "-c" | "--classes" => {
                let value = value_for(args, &mut i)?;
                let classes = value
                    .split(',')
                    .filter(|name| !name.trim().is_empty())
                    .map(|name| name.parse::<CharClass>())
                    .collect::<Result<Vec<CharClass>, _>>()?;
                flags.classes = Some(classes);
            }
            "-o" | "--output" => {
                let value = value_for(args, &mut i)?;
                flags.output = Some(value.to_string());
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Advance past a flag and return its value.
fn value_for<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}
