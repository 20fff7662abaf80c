use crate::error::{Error, Result};

/// List names that are suppressed when no others are given.
pub const BUILTIN_ALTERNATES: &[&str] = &["ads"];

/// Decides whether a list name is "uninteresting" and should be blanked.
///
/// The rewriter only talks to this trait, so the set of names can come
/// from anywhere without touching the rewriting logic.
pub trait AlternateNames {
	/// `name` is already trimmed of surrounding whitespace.
	fn is_alternate(&self, name: &str) -> bool;
}

impl<T: AlternateNames + ?Sized> AlternateNames for &T {
	fn is_alternate(&self, name: &str) -> bool {
		(**self).is_alternate(name)
	}
}

/// A fixed, ordered set of alternate list names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownAlternates {
	names: Vec<String>,
}

impl KnownAlternates {
	/// The compiled-in set.
	pub fn builtin() -> Self {
		KnownAlternates {
			names: BUILTIN_ALTERNATES.iter().map(|s| s.to_string()).collect(),
		}
	}

	/// Build a set from caller-supplied names, keeping first-seen order.
	///
	/// Names are compared against trimmed list names, so an empty name or
	/// one with surrounding whitespace could never match and is rejected.
	pub fn new<I, S>(names: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut set: Vec<String> = Vec::new();
		for name in names {
			let name = name.into();
			if name.is_empty() || name.trim() != name {
				return Err(Error::InvalidAlternate { name });
			}
			if !set.contains(&name) {
				set.push(name);
			}
		}
		Ok(KnownAlternates { names: set })
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.names.iter().map(String::as_str)
	}
}

impl Default for KnownAlternates {
	fn default() -> Self {
		Self::builtin()
	}
}

impl AlternateNames for KnownAlternates {
	fn is_alternate(&self, name: &str) -> bool {
		self.names.iter().any(|known| known == name)
	}
}
