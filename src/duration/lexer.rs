/// A duration string split into its numeric literal and its unit suffix.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct Tokens<'a> {
    pub(crate) number: &'a str,
    pub(crate) suffix: Option<&'a str>,
}

/// Splits `input` immediately after its last ASCII digit. Everything up to and including that
/// digit is the number, anything after it is the suffix. Input that ends in a digit has no
/// suffix. Input with no digit at all is returned whole as the number, for the number format
/// to reject.
pub(crate) fn tokenize(input: &str) -> Tokens<'_> {
    match input.rfind(|c: char| c.is_ascii_digit()) {
        Some(last_digit) if last_digit + 1 < input.len() => Tokens {
            number: &input[..=last_digit],
            suffix: Some(&input[last_digit + 1..]),
        },
        _ => Tokens {
            number: input,
            suffix: None,
        },
    }
}
