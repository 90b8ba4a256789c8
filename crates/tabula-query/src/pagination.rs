//! Pagination state for tables

/// Pagination configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
	/// Number of items per page
	pub per_page: usize,
	/// Current page number (1-indexed)
	pub current_page: usize,
	/// Total number of items
	pub total_items: usize,
}

impl Pagination {
	/// Creates a new pagination configuration on page 1
	///
	/// # Arguments
	///
	/// * `per_page` - Number of items per page (at least 1)
	pub fn new(per_page: usize) -> Self {
		Self {
			per_page: per_page.max(1),
			current_page: 1,
			total_items: 0,
		}
	}

	/// Returns the total number of pages
	pub fn total_pages(&self) -> usize {
		if self.total_items == 0 {
			0
		} else {
			self.total_items.div_ceil(self.per_page)
		}
	}

	/// Returns the start index for the current page (0-indexed)
	pub fn start_index(&self) -> usize {
		(self.current_page.saturating_sub(1)) * self.per_page
	}

	/// Returns the end index for the current page (exclusive, 0-indexed)
	pub fn end_index(&self) -> usize {
		(self.start_index() + self.per_page).min(self.total_items)
	}

	/// Returns true if a page follows the current one
	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages()
	}

	/// Returns true if a page precedes the current one
	pub fn has_prev(&self) -> bool {
		self.current_page > 1
	}

	/// Moves to the next page if available
	pub fn next_page(&mut self) -> bool {
		if self.has_next() {
			self.current_page += 1;
			true
		} else {
			false
		}
	}

	/// Moves to the previous page if available
	pub fn prev_page(&mut self) -> bool {
		if self.has_prev() {
			self.current_page -= 1;
			true
		} else {
			false
		}
	}

	/// Sets the current page, clamped to the available pages
	pub fn set_page(&mut self, page: usize) {
		self.current_page = page.max(1).min(self.total_pages().max(1));
	}

	/// Updates the item count and clamps the current page to it
	pub fn set_total_items(&mut self, total_items: usize) {
		self.total_items = total_items;
		let page = self.current_page;
		self.set_page(page);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn pagination(per_page: usize, total_items: usize) -> Pagination {
		let mut pagination = Pagination::new(per_page);
		pagination.set_total_items(total_items);
		pagination
	}

	#[rstest]
	#[case(10, 0, 0)]
	#[case(10, 1, 1)]
	#[case(10, 10, 1)]
	#[case(10, 11, 2)]
	#[case(3, 10, 4)]
	fn test_total_pages(#[case] per_page: usize, #[case] total: usize, #[case] pages: usize) {
		assert_eq!(pagination(per_page, total).total_pages(), pages);
	}

	#[rstest]
	fn test_indices_on_last_page() {
		let mut pagination = pagination(3, 10);
		pagination.set_page(4);
		assert_eq!(pagination.start_index(), 9);
		assert_eq!(pagination.end_index(), 10);
		assert!(!pagination.has_next());
	}

	#[rstest]
	fn test_navigation() {
		let mut pagination = pagination(5, 12);
		assert!(!pagination.prev_page());
		assert!(pagination.next_page());
		assert!(pagination.next_page());
		assert!(!pagination.next_page());
		assert_eq!(pagination.current_page, 3);
		assert!(pagination.prev_page());
		assert_eq!(pagination.current_page, 2);
	}

	#[rstest]
	#[case(0, 1)]
	#[case(2, 2)]
	#[case(99, 3)]
	fn test_set_page_clamps(#[case] requested: usize, #[case] expected: usize) {
		let mut pagination = pagination(5, 12);
		pagination.set_page(requested);
		assert_eq!(pagination.current_page, expected);
	}

	#[rstest]
	fn test_shrinking_total_clamps_current_page() {
		let mut pagination = pagination(5, 12);
		pagination.set_page(3);
		pagination.set_total_items(4);
		assert_eq!(pagination.current_page, 1);
	}

	#[rstest]
	fn test_zero_per_page_is_raised_to_one() {
		assert_eq!(Pagination::new(0).per_page, 1);
	}
}
