//! mutt-index-tidy - a mutt `index_format` filter.
//!
//! mutt runs the filter once per message in the index view, passing the
//! formatted line as the only argument. The line is expected to carry the
//! sender's date (`[S:...]`), the local date, and optionally a list name
//! (`[LIST: ...]`). The sender's date is blanked when it agrees with the
//! local date to the minute, and list names that are "alternates" (such as
//! the name of the inbox itself) are blanked as well. Blanked fields are
//! replaced by spaces so the index columns stay aligned.
//!
//! # Example
//!
//! ```
//! use mutt_index_tidy::format::{LineRewriter, Variant};
//!
//! let rewriter = LineRewriter::with_builtin(Variant::WithListName).unwrap();
//! let line = "5  N F  [S:2005-06-02 11:52:28]  2005-06-02 11:52:28  [LIST: ads             ]  To someone  testing 01";
//!
//! let rewritten = rewriter.rewrite(line).unwrap();
//! assert!(!rewritten.as_str().contains("[S:"));
//! assert!(!rewritten.as_str().contains("ads"));
//! ```

pub mod alternates;
pub mod error;
pub mod format;

pub use error::{Error, Result};
