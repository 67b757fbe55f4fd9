use std::borrow::Cow;
use std::convert::TryFrom;

use serde::Deserialize;

use crate::error::*;
use crate::unit::{TimeUnit, UNIT_COUNT};

static ENGLISH: Locale = Locale::builtin_table(
    "en",
    [
        "m", "h", "d", "w", "mo", "y", "%", "em", "eh", "ed", "ew", "emo", "ey", "e%",
    ],
);

static GERMAN: Locale = Locale::builtin_table(
    "de",
    [
        "m", "h", "t", "w", "mo", "j", "%", "em", "eh", "et", "ew", "emo", "ej", "e%",
    ],
);

static BUILTIN: [&Locale; 2] = [&ENGLISH, &GERMAN];

/// A table of unit suffixes for one language.
///
/// Each unit has exactly one canonical suffix, used when rendering. Parsing accepts the
/// canonical suffixes plus any aliases, compared case-insensitively. New languages are added
/// by building another table; [`TimeUnit`] itself never changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Locale {
    tag: Cow<'static, str>,
    suffixes: [Cow<'static, str>; UNIT_COUNT],
    aliases: Vec<(Cow<'static, str>, TimeUnit)>,
}

impl Locale {
    const fn builtin_table(tag: &'static str, suffixes: [&'static str; UNIT_COUNT]) -> Self {
        Self {
            tag: Cow::Borrowed(tag),
            suffixes: [
                Cow::Borrowed(suffixes[0]),
                Cow::Borrowed(suffixes[1]),
                Cow::Borrowed(suffixes[2]),
                Cow::Borrowed(suffixes[3]),
                Cow::Borrowed(suffixes[4]),
                Cow::Borrowed(suffixes[5]),
                Cow::Borrowed(suffixes[6]),
                Cow::Borrowed(suffixes[7]),
                Cow::Borrowed(suffixes[8]),
                Cow::Borrowed(suffixes[9]),
                Cow::Borrowed(suffixes[10]),
                Cow::Borrowed(suffixes[11]),
                Cow::Borrowed(suffixes[12]),
                Cow::Borrowed(suffixes[13]),
            ],
            aliases: Vec::new(),
        }
    }

    /// Builds a custom table. `suffixes` is indexed by [`TimeUnit::ordinal`].
    pub fn new<T, S>(tag: T, suffixes: [S; UNIT_COUNT]) -> Result<Self>
    where
        T: Into<String>,
        S: Into<String>,
    {
        let tag = tag.into();
        let mut table: [Cow<'static, str>; UNIT_COUNT] = Default::default();
        for (index, suffix) in Vec::from(suffixes).into_iter().enumerate() {
            let suffix = suffix.into();
            check_suffix(&tag, &suffix)?;
            if table[..index].iter().any(|s| s.eq_ignore_ascii_case(&suffix)) {
                return Err(Error::DuplicateSuffix { locale: tag, suffix });
            }
            table[index] = Cow::Owned(suffix);
        }

        Ok(Self {
            tag: Cow::Owned(tag),
            suffixes: table,
            aliases: Vec::new(),
        })
    }

    /// Adds a parse-only spelling for `unit`.
    pub fn with_alias(mut self, alias: impl Into<String>, unit: TimeUnit) -> Result<Self> {
        let alias = alias.into();
        check_suffix(&self.tag, &alias)?;
        if self.lookup(&alias).is_some() {
            return Err(Error::DuplicateSuffix {
                locale: self.tag.into_owned(),
                suffix: alias,
            });
        }
        self.aliases.push((Cow::Owned(alias), unit));
        Ok(self)
    }

    /// The default table, used whenever no locale is given.
    pub fn english() -> &'static Locale {
        &ENGLISH
    }

    pub fn german() -> &'static Locale {
        &GERMAN
    }

    /// Finds a built-in table by language tag, ignoring case and any region subtag
    /// (`"de-AT"` resolves to German).
    pub fn builtin(tag: &str) -> Option<&'static Locale> {
        let language = tag.split(|c: char| c == '-' || c == '_').next().unwrap_or(tag);
        BUILTIN
            .iter()
            .copied()
            .find(|locale| locale.tag.eq_ignore_ascii_case(language))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The canonical suffix rendered after a magnitude in `unit`.
    pub fn suffix(&self, unit: TimeUnit) -> &str {
        &self.suffixes[unit.ordinal()]
    }

    /// Resolves a suffix token back to its unit.
    pub fn parse_unit(&self, token: &str) -> ParseResult<TimeUnit> {
        self.lookup(token).ok_or_else(|| ParseError::UnknownUnit {
            input: token.to_string(),
            suffix: token.to_string(),
            locale: self.tag.to_string(),
        })
    }

    fn lookup(&self, token: &str) -> Option<TimeUnit> {
        self.suffixes
            .iter()
            .zip(TimeUnit::ALL.iter())
            .find(|(suffix, _)| suffix.eq_ignore_ascii_case(token))
            .map(|(_, unit)| *unit)
            .or_else(|| {
                self.aliases
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(token))
                    .map(|(_, unit)| *unit)
            })
    }
}

impl Default for Locale {
    fn default() -> Self {
        ENGLISH.clone()
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(tag: String) -> Result<Self> {
        Locale::builtin(&tag)
            .cloned()
            .ok_or(Error::UnknownLocale(tag))
    }
}

// Durations split after their last digit, so a digit anywhere in a suffix could never be
// read back.
fn check_suffix(locale: &str, suffix: &str) -> Result<()> {
    let starts_blank = suffix.chars().next().map_or(true, char::is_whitespace);
    if starts_blank || suffix.chars().any(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidSuffix {
            locale: locale.to_string(),
            suffix: suffix.to_string(),
        });
    }
    Ok(())
}
