//! Command line option parsing
//!
//! [`ArgParser`] wraps a raw argument vector and answers lookups by short
//! (`-p VALUE`) and long (`--paths=VALUE`) spelling. It knows nothing about
//! which options exist; callers ask for what they need and combine the
//! results with `?` and [`Optional::optional`].
//!
//! ```
//! use mini_find::argparse::{ArgParser, LongName, Optional, ShortName};
//!
//! let parser = ArgParser::new(["--paths=/tmp,/var", "-n", "readme.txt"]);
//! let paths = parser.list(&ShortName::new("p"), &LongName::new("paths")).unwrap();
//! assert_eq!(paths.to_vec(), vec!["/tmp", "/var"]);
//!
//! let iname = parser
//!     .value(&ShortName::new("in"), &LongName::new("iname"))
//!     .optional()
//!     .unwrap();
//! assert_eq!(iname, None);
//! ```

mod error;
mod non_empty;

use std::ffi::OsString;
use std::fmt;

pub use error::{ParseResult, ParserError};
pub use non_empty::NonEmpty;

/// Short spelling of an option, written as `-name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortName(String);

/// Long spelling of an option, written as `--name=value`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LongName(String);

impl ShortName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn matches(&self, token: &str) -> bool {
        token.strip_prefix('-') == Some(self.as_str())
    }
}

impl LongName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Prefix match so that `--name=value` is found.
    fn matches(&self, token: &str) -> bool {
        token
            .strip_prefix("--")
            .map_or(false, |rest| rest.starts_with(self.as_str()))
    }
}

impl fmt::Display for ShortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for LongName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Option lookups over one argument vector
#[derive(Debug, Clone, Default)]
pub struct ArgParser {
    args: Option<NonEmpty<String>>,
}

impl ArgParser {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args = args.into_iter().map(Into::into).collect();
        Self {
            args: NonEmpty::from_vec(args),
        }
    }

    /// Parser over the current process arguments, without the program name
    pub fn from_env() -> ParseResult<Self> {
        Self::from_os_args(std::env::args_os().skip(1))
    }

    /// Fails on the first token that is not valid UTF-8
    pub fn from_os_args<I>(args: I) -> ParseResult<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .map(|token| {
                token.into_string().map_err(|token| ParserError::InvalidValue {
                    message: format!(
                        "Argument '{}' is not valid UTF-8.",
                        token.to_string_lossy()
                    ),
                })
            })
            .collect::<ParseResult<Vec<String>>>()?;
        Ok(Self::new(args))
    }

    /// Index of the first token spelling either name, with the full vector
    fn argument(&self, short: &ShortName, long: &LongName) -> Option<(usize, &[String])> {
        let args = self.args.as_deref()?;
        args.iter()
            .position(|token| short.matches(token) || long.matches(token))
            .map(|index| (index, args))
    }

    /// Raw value of an option.
    ///
    /// A long match must carry its value inline after the first `=`; a short
    /// match takes the following token unless that token starts with `-`.
    /// Anything else counts as a missing argument.
    pub fn value(&self, short: &ShortName, long: &LongName) -> ParseResult<String> {
        self.argument(short, long)
            .and_then(|(index, args)| {
                let token = &args[index];
                if token.starts_with("--") {
                    long_value(token)
                } else {
                    short_value(args, index)
                }
            })
            .ok_or_else(|| ParserError::missing(short, long))
    }

    /// Value of an option mapped through `transform`.
    ///
    /// The transform reports rejected values itself, usually with
    /// [`ParserError::invalid_value`].
    pub fn value_with<T, F>(&self, short: &ShortName, long: &LongName, transform: F) -> ParseResult<T>
    where
        F: FnOnce(String) -> ParseResult<T>,
    {
        self.value(short, long).and_then(transform)
    }

    /// Whether either spelling appears anywhere. Never fails.
    pub fn flag(&self, short: &ShortName, long: &LongName) -> ParseResult<bool> {
        Ok(self.argument(short, long).is_some())
    }

    /// Comma separated value, keeping empty pieces such as a trailing one
    pub fn list(&self, short: &ShortName, long: &LongName) -> ParseResult<NonEmpty<String>> {
        self.value_with(short, long, |raw| {
            let mut pieces = raw.split(',').map(str::to_owned);
            // split always yields at least one piece
            let head = pieces.next().unwrap_or_default();
            Ok(NonEmpty::new(head, pieces.collect()))
        })
    }
}

fn long_value(token: &str) -> Option<String> {
    token
        .split_once('=')
        .map(|(_, value)| value)
        .filter(|value| !value.trim().is_empty())
        .map(str::to_owned)
}

fn short_value(args: &[String], index: usize) -> Option<String> {
    args.get(index + 1)
        .filter(|next| !next.starts_with('-'))
        .cloned()
}

/// Turns a missing option into `None`.
///
/// Only [`ParserError::ArgumentMissing`] is absorbed; a rejected value is
/// still an error.
pub trait Optional<T> {
    fn optional(self) -> ParseResult<Option<T>>;
}

impl<T> Optional<T> for ParseResult<T> {
    fn optional(self) -> ParseResult<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_missing() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(short: &str, long: &str) -> (ShortName, LongName) {
        (ShortName::new(short), LongName::new(long))
    }

    fn value_args() -> ArgParser {
        ArgParser::new([
            "--foo=bar",
            "-a",
            "b",
            "-b",
            "-c",
            "--emptyvalue=",
            "--foo-bar=asdf",
        ])
    }

    fn list_args() -> ArgParser {
        ArgParser::new([
            "--list=foo,bar,baz,",
            "-al",
            "b,c,d",
            "--listnovalue=",
            "-bl",
            "-a",
        ])
    }

    fn assert_missing(parser: &ArgParser, short: &str, long: &str) {
        let (short, long) = names(short, long);
        let err = parser.value(&short, &long).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Argument '{long}' ('{short}') is missing.")
        );
    }

    #[test]
    fn test_long_value() {
        let (short, long) = names("f", "foo");
        assert_eq!(value_args().value(&short, &long).unwrap(), "bar");
    }

    #[test]
    fn test_long_value_with_dashes() {
        let (short, long) = names("fb", "foo-bar");
        assert_eq!(value_args().value(&short, &long).unwrap(), "asdf");
    }

    #[test]
    fn test_short_value() {
        let (short, long) = names("a", "abc");
        assert_eq!(value_args().value(&short, &long).unwrap(), "b");
    }

    #[test]
    fn test_missing_argument() {
        assert_missing(&value_args(), "ne", "nonexistent");
    }

    #[test]
    fn test_short_argument_followed_by_flag() {
        assert_missing(&value_args(), "b", "booyakasha");
    }

    #[test]
    fn test_long_argument_with_empty_value() {
        assert_missing(&value_args(), "ev", "emptyvalue");
    }

    #[test]
    fn test_long_argument_without_equals() {
        let parser = ArgParser::new(["--opt", "value"]);
        assert_missing(&parser, "o", "opt");
    }

    #[test]
    fn test_long_argument_with_blank_value() {
        let parser = ArgParser::new(["--opt=  "]);
        assert_missing(&parser, "o", "opt");
    }

    #[test]
    fn test_short_argument_at_end() {
        let parser = ArgParser::new(["-x"]);
        assert_missing(&parser, "x", "xray");
    }

    #[test]
    fn test_long_value_keeps_later_equals() {
        let parser = ArgParser::new(["--expr=a=b"]);
        let (short, long) = names("e", "expr");
        assert_eq!(parser.value(&short, &long).unwrap(), "a=b");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let parser = ArgParser::new(["-n", "first", "--name=second"]);
        let (short, long) = names("n", "name");
        assert_eq!(parser.value(&short, &long).unwrap(), "first");
    }

    #[test]
    fn test_empty_vector() {
        let parser = ArgParser::new(Vec::<String>::new());
        assert_missing(&parser, "p", "paths");
        let (short, long) = names("d", "debug");
        assert!(!parser.flag(&short, &long).unwrap());
    }

    #[test]
    fn test_os_args() {
        let parser = ArgParser::from_os_args(vec![OsString::from("-p"), OsString::from("/tmp")]).unwrap();
        let (short, long) = names("p", "paths");
        assert_eq!(parser.value(&short, &long).unwrap(), "/tmp");
    }

    #[cfg(unix)]
    #[test]
    fn test_os_args_rejects_invalid_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let token = OsString::from_vec(b"/tmp/caf\xe9".to_vec());
        let err = ArgParser::from_os_args(vec![OsString::from("-p"), token]).unwrap_err();
        assert!(matches!(err, ParserError::InvalidValue { .. }));
        assert_eq!(err.to_string(), "Argument '/tmp/caf\u{FFFD}' is not valid UTF-8.");
    }

    #[test]
    fn test_long_list() {
        let (short, long) = names("l", "list");
        let list = list_args().list(&short, &long).unwrap();
        assert_eq!(list.into_vec(), vec!["foo", "bar", "baz", ""]);
    }

    #[test]
    fn test_short_list() {
        let (short, long) = names("al", "alist");
        let list = list_args().list(&short, &long).unwrap();
        assert_eq!(list.into_vec(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_lists_without_value() {
        let parser = list_args();
        assert_missing(&parser, "lnv", "listnovalue");
        assert_missing(&parser, "a", "anemptylistargument");
        assert_missing(&parser, "bl", "bloodylist");
    }

    #[test]
    fn test_flags() {
        let parser = ArgParser::new(["--longflag", "-sf"]);

        let (short, long) = names("sf", "shortflag");
        assert!(parser.flag(&short, &long).unwrap());

        let (short, long) = names("lf", "longflag");
        assert!(parser.flag(&short, &long).unwrap());

        let (short, long) = names("mf", "missingflag");
        assert!(!parser.flag(&short, &long).unwrap());
    }

    #[test]
    fn test_flag_ignores_following_value() {
        let parser = ArgParser::new(["-v", "value"]);
        let (short, long) = names("v", "verbose");
        assert!(parser.flag(&short, &long).unwrap());
    }

    #[test]
    fn test_value_with_transform() {
        let parser = ArgParser::new(["--count=12", "-x", "abc"]);

        let (short, long) = names("c", "count");
        let count = parser.value_with(&short, &long, |raw| {
            raw.parse::<u32>()
                .map_err(|_| ParserError::invalid_value(&short, &long, &raw))
        });
        assert_eq!(count.unwrap(), 12);

        let (short, long) = names("x", "xcount");
        let err = parser
            .value_with(&short, &long, |raw| {
                raw.parse::<u32>()
                    .map_err(|_| ParserError::invalid_value(&short, &long, &raw))
            })
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for argument (-x, --xcount): 'abc'."
        );
    }

    #[test]
    fn test_optional_absorbs_missing() {
        let parser = ArgParser::new(["--foo=bar"]);

        let (short, long) = names("f", "foo");
        assert_eq!(parser.value(&short, &long).optional().unwrap(), Some("bar".to_string()));

        let (short, long) = names("m", "missing");
        assert_eq!(parser.value(&short, &long).optional().unwrap(), None);
    }

    #[test]
    fn test_optional_keeps_invalid_value() {
        let parser = ArgParser::new(["--foo=bar"]);
        let (short, long) = names("f", "foo");
        let result = parser
            .value_with(&short, &long, |raw| -> ParseResult<u8> {
                Err(ParserError::invalid_value(&short, &long, &raw))
            })
            .optional();
        assert!(matches!(result, Err(ParserError::InvalidValue { .. })));
    }
}
