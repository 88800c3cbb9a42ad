use thiserror::Error;

/// Reasons a boundary file is rejected.
///
/// A rejected import never touches the current print area.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
	/// The file extension is neither `.kml` nor `.kmz`.
	#[error("unsupported boundary file format '{extension}', expected .kml or .kmz")]
	UnsupportedFormat { extension: String },

	/// The container or markup could not be read, or lacks the expected structure.
	#[error("failed to parse boundary file: {0}")]
	ParseFailure(String),

	/// The boundary has fewer than three coordinate triples.
	#[error("boundary file does not contain a polygon (need at least 3 coordinates, found {found})")]
	TooFewVertices { found: usize },
}

impl ImportError {
	pub(crate) fn parse(message: impl ToString) -> Self {
		ImportError::ParseFailure(message.to_string())
	}
}
