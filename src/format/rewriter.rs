use crate::alternates::{AlternateNames, KnownAlternates};
use crate::error::Result;
use crate::format::pattern::{IndexPattern, ParsedFields, Variant};
use std::iter;

/// Result of rewriting one index line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite<'a> {
	/// The line matched and was reassembled.
	Rewritten(String),

	/// The line did not have the expected shape and is echoed unchanged.
	PassThrough(&'a str),
}

impl Rewrite<'_> {
	/// The line to hand back to the caller.
	pub fn as_str(&self) -> &str {
		match self {
			Rewrite::Rewritten(line) => line.as_str(),
			Rewrite::PassThrough(line) => line,
		}
	}

	pub fn is_pass_through(&self) -> bool {
		matches!(self, Rewrite::PassThrough(_))
	}
}

/// Blanks redundant sender dates and uninteresting list names from
/// mutt index lines while keeping every column where it was.
///
/// The pattern is compiled once in [`LineRewriter::new`] and reused for
/// every call to [`LineRewriter::rewrite`].
#[derive(Debug, Clone)]
pub struct LineRewriter<A = KnownAlternates> {
	pattern: IndexPattern,
	alternates: A,
}

impl<A: AlternateNames> LineRewriter<A> {
	pub fn new(variant: Variant, alternates: A) -> Result<Self> {
		Ok(LineRewriter {
			pattern: IndexPattern::new(variant)?,
			alternates,
		})
	}

	pub fn variant(&self) -> Variant {
		self.pattern.variant()
	}

	/// Rewrite a single index line.
	///
	/// Lines that do not match are returned as [`Rewrite::PassThrough`];
	/// only a broken pattern/capture invariant is reported as an error.
	pub fn rewrite<'a>(&self, line: &'a str) -> Result<Rewrite<'a>> {
		let Some(fields) = self.pattern.parse(line)? else {
			log::warn!("input line did not match regex; passing through unchanged");
			return Ok(Rewrite::PassThrough(line));
		};
		log::info!("input line matched regex");

		let mut out = String::with_capacity(line.len());
		out.push_str(fields.leading);
		push_dates(&mut out, &fields);
		if let Some(raw) = fields.list_name {
			push_list_name(&mut out, raw, &self.alternates);
		}
		out.push_str(fields.trailing);

		Ok(Rewrite::Rewritten(out))
	}
}

impl LineRewriter<KnownAlternates> {
	/// Rewriter for `variant` using the compiled-in alternates.
	pub fn with_builtin(variant: Variant) -> Result<Self> {
		Self::new(variant, KnownAlternates::builtin())
	}
}

fn push_dates(out: &mut String, fields: &ParsedFields<'_>) {
	if fields.dates_match() {
		// The whole "[S:...]  " chunk turns into spaces.
		let width = char_width(fields.sender_open)
			+ char_width(fields.sender_date)
			+ char_width(fields.sender_tail);
		push_spaces(out, width);
	} else {
		log::info!("dates are different; passing through unchanged");
		out.push_str(fields.sender_open);
		out.push_str(fields.sender_date);
		out.push_str(fields.sender_tail);
	}
	out.push_str(fields.local_date);
	out.push_str(fields.local_tail);
}

/// Emit the list-name field at its declared width: the raw capture plus
/// the two brackets. The `LIST:` landmark itself is never echoed.
fn push_list_name<A: AlternateNames>(out: &mut String, raw: &str, alternates: &A) {
	let width = 2 + char_width(raw);
	let name = raw.trim();

	if alternates.is_alternate(name) {
		log::debug!("suppressing alternate list name {name:?}");
		push_spaces(out, width);
	} else {
		out.push('[');
		out.push_str(name);
		out.push(']');
		push_spaces(out, width - char_width(name) - 2);
	}
}

fn char_width(s: &str) -> usize {
	s.chars().count()
}

fn push_spaces(out: &mut String, count: usize) {
	out.extend(iter::repeat_n(' ', count));
}
