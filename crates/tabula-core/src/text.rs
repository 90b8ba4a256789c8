//! Text helpers

/// Converts a header label into a snake_case attribute name
///
/// Whitespace, hyphens and other punctuation become single underscores, and
/// a lowercase-to-uppercase boundary starts a new word.
///
/// ```rust
/// use tabula_core::text::snake_case;
///
/// assert_eq!(snake_case("Companies count"), "companies_count");
/// assert_eq!(snake_case("createdAt"), "created_at");
/// assert_eq!(snake_case("Id"), "id");
/// ```
pub fn snake_case(label: &str) -> String {
	let mut out = String::with_capacity(label.len() + 4);
	let mut pending_separator = false;
	let mut prev_lower_or_digit = false;

	for c in label.trim().chars() {
		if c.is_alphanumeric() {
			let boundary = c.is_uppercase() && prev_lower_or_digit;
			if (pending_separator || boundary) && !out.is_empty() {
				out.push('_');
			}
			pending_separator = false;
			prev_lower_or_digit = c.is_lowercase() || c.is_numeric();
			out.extend(c.to_lowercase());
		} else {
			pending_separator = true;
			prev_lower_or_digit = false;
		}
	}

	out
}
