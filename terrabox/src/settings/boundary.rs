use terrabox_geometry::ImportError;

/// Identifies one boundary file selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ImportTicket(u64);

/// Result of finishing a boundary import.
#[derive(Clone, Debug, PartialEq)]
pub enum ImportOutcome {
	/// The boundary replaced the print area.
	Applied,
	/// Another file was selected in the meantime; the result was dropped.
	Stale,
	/// The file was rejected; the print area is unchanged.
	Rejected(ImportError),
}

/// Hands out tickets for file selections. Only the latest selection may complete.
#[derive(Clone, Debug, Default)]
pub struct BoundarySelections {
	generation: u64,
	active: Option<ImportTicket>,
}

impl BoundarySelections {
	/// Starts a new selection, superseding any pending one.
	pub fn select(&mut self) -> ImportTicket {
		self.generation += 1;
		let ticket = ImportTicket(self.generation);
		self.active = Some(ticket);
		ticket
	}

	pub fn is_active(&self, ticket: ImportTicket) -> bool {
		self.active == Some(ticket)
	}

	/// Ends `ticket` if it is the active selection; returns `false` for stale tickets.
	pub fn complete(&mut self, ticket: ImportTicket) -> bool {
		if self.is_active(ticket) {
			self.active = None;
			true
		} else {
			false
		}
	}
}
