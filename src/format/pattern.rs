use crate::error::{Error, Result};
use regex::{Captures, Regex};

/// `YYYY-MM-DD hh:mm`; seconds are left to the surrounding tail.
const DATE: &str = r"[[:digit:]]{4}-[[:digit:]]{1,2}-[[:digit:]]{1,2}[[:space:]]+[[:digit:]]{1,2}:[[:digit:]]{1,2}";

/// Which shape of index line to expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
	/// `... [S:<date>]  <date>  <rest>`
	DatesOnly,

	/// `<num>  <flags>  [S:<date>]  <date>  [LIST: <name>]  <rest>`
	#[default]
	WithListName,
}

impl Variant {
	fn pattern_source(self) -> String {
		match self {
			Variant::DatesOnly => format!(
				r"^(?P<leading>.*[[:space:]]+)(?P<sender_open>\[S:)(?P<sender_date>{DATE})(?P<sender_tail>:[[:digit:]]{{1,2}}\][[:space:]]+)(?P<local_date>{DATE})(?P<local_tail>:[[:digit:]]{{1,2}})(?P<trailing>.*)$"
			),
			Variant::WithListName => format!(
				r"^(?P<leading>[[:space:]]*[[:digit:]]+[[:space:]]+[^\[]+)(?P<sender_open>\[S:)(?P<sender_date>{DATE})(?P<sender_tail>:[[:digit:]]{{1,2}}\][[:space:]]+)(?P<local_date>{DATE})(?P<local_tail>:[[:digit:]]{{1,2}}[[:space:]]+)\[LIST:(?P<list_name>[[:space:]]*[^\]]+)\](?P<trailing>[[:space:]]+.*)$"
			),
		}
	}
}

/// Segments of a matched index line, in left-to-right order.
///
/// Every field borrows from the original line; nothing is copied until
/// the rewriter assembles its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFields<'a> {
	/// Sequence number, flags, and anything else before `[S:`.
	pub leading: &'a str,

	/// The literal `[S:`.
	pub sender_open: &'a str,

	/// Sender's date, truncated to the minute.
	pub sender_date: &'a str,

	/// Sender's seconds, the closing `]`, and the whitespace after it.
	pub sender_tail: &'a str,

	/// Local date, truncated to the minute.
	pub local_date: &'a str,

	/// Local seconds. With a list tag this also holds the whitespace before it.
	pub local_tail: &'a str,

	/// Raw text between `[LIST:` and `]`, surrounding whitespace included.
	pub list_name: Option<&'a str>,

	/// Remainder of the line (sender, sizes, subject).
	pub trailing: &'a str,
}

impl ParsedFields<'_> {
	/// Minute-granularity comparison; the seconds never reach it.
	pub fn dates_match(&self) -> bool {
		self.sender_date == self.local_date
	}

	/// Concatenate every segment back into the line it was parsed from.
	#[cfg(test)]
	fn reassemble(&self) -> String {
		let mut line = String::new();
		line.push_str(self.leading);
		line.push_str(self.sender_open);
		line.push_str(self.sender_date);
		line.push_str(self.sender_tail);
		line.push_str(self.local_date);
		line.push_str(self.local_tail);
		if let Some(list_name) = self.list_name {
			line.push_str("[LIST:");
			line.push_str(list_name);
			line.push(']');
		}
		line.push_str(self.trailing);
		line
	}
}

/// The structural pattern for one index line variant, compiled once.
#[derive(Debug, Clone)]
pub struct IndexPattern {
	variant: Variant,
	regex: Regex,
}

impl IndexPattern {
	pub fn new(variant: Variant) -> Result<Self> {
		let pattern = variant.pattern_source();
		let regex = Regex::new(&pattern).map_err(|source| Error::InvalidPattern {
			pattern: pattern.clone(),
			source,
		})?;
		Ok(IndexPattern { variant, regex })
	}

	pub fn variant(&self) -> Variant {
		self.variant
	}

	/// Match `line` as a whole.
	///
	/// Returns `Ok(None)` when the line does not have the expected shape.
	/// Partial matches are never reported.
	pub fn parse<'a>(&self, line: &'a str) -> Result<Option<ParsedFields<'a>>> {
		let Some(caps) = self.regex.captures(line) else {
			return Ok(None);
		};

		let list_name = match self.variant {
			Variant::DatesOnly => None,
			Variant::WithListName => Some(group(&caps, "list_name")?),
		};

		Ok(Some(ParsedFields {
			leading: group(&caps, "leading")?,
			sender_open: group(&caps, "sender_open")?,
			sender_date: group(&caps, "sender_date")?,
			sender_tail: group(&caps, "sender_tail")?,
			local_date: group(&caps, "local_date")?,
			local_tail: group(&caps, "local_tail")?,
			list_name,
			trailing: group(&caps, "trailing")?,
		}))
	}
}

fn group<'a>(caps: &Captures<'a>, name: &'static str) -> Result<&'a str> {
	caps.name(name)
		.map(|m| m.as_str())
		.ok_or(Error::MissingCapture { group: name })
}

#[cfg(test)]
mod tests {
	use super::*;

	const LIST_LINE: &str = "23666  N    [S:2015-10-26 12:55:52]  2015-10-26 12:55:52  [LIST: ads             ]  sender@example.com             (b:   1.3K; l:   144)     blah blah blah some random subject";
	const DATES_LINE: &str = "23666  N    [S:2015-10-26 12:55:52]  2015-10-26 12:55:52  sender@example.com             (   144)     blah blah blah some random subject";

	fn parse(variant: Variant, line: &str) -> Option<ParsedFields<'_>> {
		IndexPattern::new(variant).unwrap().parse(line).unwrap()
	}

	#[test]
	fn test_both_variants_compile() {
		assert!(IndexPattern::new(Variant::DatesOnly).is_ok());
		assert!(IndexPattern::new(Variant::WithListName).is_ok());
		assert_eq!(Variant::default(), Variant::WithListName);
	}

	#[test]
	fn test_parse_list_line_fields() {
		let fields = parse(Variant::WithListName, LIST_LINE).unwrap();
		assert_eq!(fields.leading, "23666  N    ");
		assert_eq!(fields.sender_open, "[S:");
		assert_eq!(fields.sender_date, "2015-10-26 12:55");
		assert_eq!(fields.sender_tail, ":52]  ");
		assert_eq!(fields.local_date, "2015-10-26 12:55");
		assert_eq!(fields.local_tail, ":52  ");
		assert_eq!(fields.list_name, Some(" ads             "));
		assert!(fields.trailing.starts_with("  sender@example.com"));
		assert!(fields.trailing.ends_with("some random subject"));
		assert!(fields.dates_match());
	}

	#[test]
	fn test_parse_dates_line_fields() {
		let fields = parse(Variant::DatesOnly, DATES_LINE).unwrap();
		assert_eq!(fields.leading, "23666  N    ");
		assert_eq!(fields.local_tail, ":52");
		assert_eq!(fields.list_name, None);
		assert!(fields.trailing.starts_with("  sender@example.com"));
	}

	#[test]
	fn test_reassemble_reconstructs_input() {
		let fields = parse(Variant::WithListName, LIST_LINE).unwrap();
		assert_eq!(fields.reassemble(), LIST_LINE);

		let fields = parse(Variant::DatesOnly, DATES_LINE).unwrap();
		assert_eq!(fields.reassemble(), DATES_LINE);

		// A list line still has the date-pair shape.
		let fields = parse(Variant::DatesOnly, LIST_LINE).unwrap();
		assert_eq!(fields.reassemble(), LIST_LINE);
	}

	#[test]
	fn test_seconds_are_excluded_from_comparison() {
		let line = "5  N F  [S:2005-06-02 11:52:28]  2005-06-02 11:52:01  [LIST: ads             ]  To asalewski@gmail.com         (b:   0.1K; l:      1)     testing 01";
		let fields = parse(Variant::WithListName, line).unwrap();
		assert!(fields.dates_match());
	}

	#[test]
	fn test_different_minutes_do_not_match() {
		let line = LIST_LINE.replacen("2015-10-26 12:55:52  [LIST", "2015-10-26 13:10:05  [LIST", 1);
		let fields = parse(Variant::WithListName, &line).unwrap();
		assert_eq!(fields.local_date, "2015-10-26 13:10");
		assert!(!fields.dates_match());
	}

	#[test]
	fn test_single_digit_date_parts() {
		let line = "7  N  [S:2015-1-2 3:4:5]  2015-1-2 3:4:5  [LIST: x]  rest";
		let fields = parse(Variant::WithListName, line).unwrap();
		assert_eq!(fields.sender_date, "2015-1-2 3:4");
		assert_eq!(fields.list_name, Some(" x"));
		assert_eq!(fields.trailing, "  rest");
	}

	#[test]
	fn test_missing_sender_tag_is_no_match() {
		let line = LIST_LINE.replace("[S:", "[X:");
		assert!(parse(Variant::WithListName, &line).is_none());
		assert!(parse(Variant::DatesOnly, &line).is_none());
	}

	#[test]
	fn test_missing_list_tag_is_no_match() {
		assert!(parse(Variant::WithListName, DATES_LINE).is_none());
	}

	#[test]
	fn test_list_variant_requires_sequence_number() {
		let line = LIST_LINE.replacen("23666", "abc", 1);
		assert!(parse(Variant::WithListName, &line).is_none());
		assert!(parse(Variant::DatesOnly, &line).is_some());
	}

	#[test]
	fn test_truncated_date_is_no_match() {
		let line = LIST_LINE.replacen("[S:2015-10-26 12:55:52]", "[S:2015-10-26 12:55]", 1);
		assert!(parse(Variant::WithListName, &line).is_none());
	}

	#[test]
	fn test_list_tag_needs_trailing_whitespace() {
		let line = "1  N  [S:2015-10-26 12:55:52]  2015-10-26 12:55:52  [LIST: ads]sender";
		assert!(parse(Variant::WithListName, line).is_none());
	}

	#[test]
	fn test_empty_line_is_no_match() {
		assert!(parse(Variant::WithListName, "").is_none());
		assert!(parse(Variant::DatesOnly, "").is_none());
	}
}
