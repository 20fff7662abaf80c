/// Library-level structured errors for mutt-index-tidy.
///
/// A line that does not look like an index line is not an error; it is
/// passed through. These variants cover the cases that are never caused
/// by the caller's display line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid index line pattern: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Pattern matched but capture group `{group}` is missing")]
	MissingCapture { group: &'static str },

	#[error("Invalid alternate list name: {name:?} (must be non-empty without surrounding whitespace)")]
	InvalidAlternate { name: String },
}

/// Result type alias using Error.
pub type Result<T> = std::result::Result<T, Error>;
