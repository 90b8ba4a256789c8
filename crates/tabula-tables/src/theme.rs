//! HTML themes
//!
//! A [`Theme`] turns a [`RenderedTable`] into markup. Themes only pick CSS
//! classes; the document structure is shared:
//!
//! ```text
//! <table>
//!   <thead><tr><th scope="col"><a href="?sort=-name" title="...">ICON Name</a></th>...</tr></thead>
//!   <tbody><tr><td>...</td>...</tr></tbody>
//! </table>
//! <nav><ul>prev, current, next</ul></nav>
//! ```
//!
//! Query string names and values are percent-encoded. Labels, cell values,
//! titles and hrefs are then HTML escaped. Icons come from settings and are
//! inserted verbatim.

use crate::render::{HeaderCell, PageInfo, RenderedTable};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;
use tabula_conf::{TableSettings, ThemeKind};
use urlencoding::encode;

/// Renders a table as HTML
pub trait Theme: Send + Sync {
	/// Theme name, for logs
	fn name(&self) -> &'static str;

	/// Class of a `<div>` wrapping the table; no wrapper when `None`
	fn wrapper_class(&self) -> Option<&'static str> {
		None
	}

	/// Class of `<table>`
	fn table_class(&self) -> Option<&'static str> {
		None
	}

	/// Class of `<th>`
	fn header_class(&self) -> Option<&'static str> {
		None
	}

	/// Class of sort links
	fn sort_link_class(&self) -> Option<&'static str> {
		None
	}

	/// Class of `<td>`, before the column's own classes
	fn cell_class(&self) -> Option<&'static str> {
		None
	}

	/// Class of the cell holding the empty message
	fn empty_class(&self) -> Option<&'static str> {
		None
	}

	/// Classes of the pagination list, its items and its links
	fn pagination_classes(&self) -> PaginationClasses {
		PaginationClasses::default()
	}

	/// Renders `table`
	fn render(&self, table: &RenderedTable, settings: &TableSettings) -> String {
		let mut html = String::new();

		if let Some(wrapper) = self.wrapper_class() {
			let _ = writeln!(html, "<div{}>", class_attr(&[wrapper]));
		}
		let _ = writeln!(
			html,
			"<table{}>",
			class_attr(&[self.table_class().unwrap_or_default()])
		);

		html.push_str("<thead>\n<tr>\n");
		for header in &table.headers {
			html.push_str(&self.render_header(header, settings));
		}
		html.push_str("</tr>\n</thead>\n");

		html.push_str("<tbody>\n");
		if table.is_empty() {
			let _ = write!(
				html,
				"<tr>\n<td{} colspan=\"{}\">{}</td>\n</tr>\n",
				class_attr(&[self.empty_class().unwrap_or_default()]),
				table.column_count(),
				encode_text(&settings.empty_message)
			);
		}
		let cell_class = self.cell_class().unwrap_or_default();
		for row in &table.rows {
			html.push_str("<tr>\n");
			for cell in row {
				let _ = writeln!(
					html,
					"<td{}>{}</td>",
					class_attr(&[cell_class, cell.css_class.as_str()]),
					encode_text(&cell.value)
				);
			}
			html.push_str("</tr>\n");
		}
		html.push_str("</tbody>\n</table>\n");

		if self.wrapper_class().is_some() {
			html.push_str("</div>\n");
		}

		if let Some(page) = table.page.filter(|page| page.total_pages > 1) {
			html.push_str(&self.render_pagination(&page, table.sort_query.as_deref(), settings));
		}

		html
	}

	/// Renders one `<th>`
	fn render_header(&self, header: &HeaderCell, settings: &TableSettings) -> String {
		let class = class_attr(&[self.header_class().unwrap_or_default()]);
		let label = encode_text(&header.label);
		match &header.sort {
			Some(sort) => format!(
				"<th{} scope=\"col\">\n<a{} href=\"{}\" title=\"{}\">{} {}</a>\n</th>\n",
				class,
				class_attr(&[self.sort_link_class().unwrap_or_default()]),
				encode_double_quoted_attribute(&sort_href(settings, &sort.query)),
				encode_double_quoted_attribute(&sort.title),
				sort.icon,
				label
			),
			None => format!("<th{} scope=\"col\">\n{}\n</th>\n", class, label),
		}
	}

	/// Renders previous, current and next page links
	fn render_pagination(
		&self,
		page: &PageInfo,
		sort_query: Option<&str>,
		settings: &TableSettings,
	) -> String {
		let classes = self.pagination_classes();
		let link = |html: &mut String, number: usize, rel: &str, text: &str| {
			let _ = writeln!(
				html,
				"<li{}><a{} href=\"{}\" rel=\"{}\">{}</a></li>",
				class_attr(&[classes.item]),
				class_attr(&[classes.link]),
				encode_double_quoted_attribute(&page_href(settings, sort_query, number)),
				rel,
				text
			);
		};

		let mut html = String::new();
		let _ = writeln!(
			html,
			"<nav aria-label=\"Table pagination\">\n<ul{}>",
			class_attr(&[classes.list])
		);
		if let Some(prev) = page.prev() {
			link(&mut html, prev, "prev", "&laquo;");
		}
		let _ = writeln!(
			html,
			"<li{} aria-current=\"page\"><span{}>{} / {}</span></li>",
			class_attr(&[classes.item, classes.active]),
			class_attr(&[classes.link]),
			page.current,
			page.total_pages
		);
		if let Some(next) = page.next() {
			link(&mut html, next, "next", "&raquo;");
		}
		html.push_str("</ul>\n</nav>\n");
		html
	}
}

/// CSS classes of the pagination markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationClasses {
	/// `<ul>`
	pub list: &'static str,
	/// `<li>`
	pub item: &'static str,
	/// Extra class of the current page `<li>`
	pub active: &'static str,
	/// `<a>` and `<span>` inside items
	pub link: &'static str,
}

/// Bootstrap 5 markup
#[derive(Debug, Clone, Copy, Default)]
pub struct Bootstrap5;

impl Theme for Bootstrap5 {
	fn name(&self) -> &'static str {
		"bootstrap5"
	}

	fn wrapper_class(&self) -> Option<&'static str> {
		Some("table-responsive")
	}

	fn table_class(&self) -> Option<&'static str> {
		Some("table table-borderless table-striped table-hover align-middle mb-0")
	}

	fn header_class(&self) -> Option<&'static str> {
		Some("align-middle")
	}

	fn sort_link_class(&self) -> Option<&'static str> {
		Some("d-flex align-items-center gap-2 text-decoration-none")
	}

	fn cell_class(&self) -> Option<&'static str> {
		Some("align-middle")
	}

	fn empty_class(&self) -> Option<&'static str> {
		Some("text-center p-3")
	}

	fn pagination_classes(&self) -> PaginationClasses {
		PaginationClasses {
			list: "pagination justify-content-center mt-3",
			item: "page-item",
			active: "active",
			link: "page-link",
		}
	}
}

/// Markup without CSS framework classes
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Theme for Plain {
	fn name(&self) -> &'static str {
		"plain"
	}
}

/// Returns the theme selected in settings
pub fn theme_for(kind: ThemeKind) -> Box<dyn Theme> {
	match kind {
		ThemeKind::Bootstrap5 => Box::new(Bootstrap5),
		ThemeKind::Plain => Box::new(Plain),
	}
}

/// Builds ` class="a b"` from the non-empty parts, or nothing
fn class_attr(parts: &[&str]) -> String {
	let classes: Vec<&str> = parts.iter().copied().filter(|part| !part.is_empty()).collect();
	if classes.is_empty() {
		String::new()
	} else {
		format!(" class=\"{}\"", encode_double_quoted_attribute(&classes.join(" ")))
	}
}

/// `?name=value&...` with every name and value percent-encoded
fn query_string(pairs: &[(&str, &str)]) -> String {
	let encoded: Vec<String> = pairs
		.iter()
		.map(|(name, value)| format!("{}={}", encode(name), encode(value)))
		.collect();
	format!("?{}", encoded.join("&"))
}

fn sort_href(settings: &TableSettings, query: &str) -> String {
	query_string(&[(settings.sort_param.as_str(), query)])
}

fn page_href(settings: &TableSettings, sort_query: Option<&str>, page: usize) -> String {
	let page = page.to_string();
	match sort_query {
		Some(sort) => query_string(&[
			(settings.sort_param.as_str(), sort),
			(settings.page_param.as_str(), page.as_str()),
		]),
		None => query_string(&[(settings.page_param.as_str(), page.as_str())]),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::render::{BodyCell, SortControl, SortStatus};
	use rstest::*;

	fn assert_see_in_order(html: &str, parts: &[&str]) {
		let mut rest = html;
		for part in parts {
			match rest.find(part) {
				Some(index) => rest = &rest[index + part.len()..],
				None => panic!("expected {:?} in order in:\n{}", part, html),
			}
		}
	}

	fn cell(value: &str) -> BodyCell {
		BodyCell {
			value: value.to_string(),
			css_class: String::new(),
		}
	}

	#[fixture]
	fn table() -> RenderedTable {
		RenderedTable {
			headers: vec![
				HeaderCell {
					label: "Id".to_string(),
					sort: None,
				},
				HeaderCell {
					label: "Name".to_string(),
					sort: Some(SortControl {
						key: "name".to_string(),
						status: SortStatus::Ascending,
						icon: "<i>icon-sort-desc</i>".to_string(),
						title: "Sort descending".to_string(),
						query: "-name".to_string(),
					}),
				},
			],
			rows: vec![
				vec![cell("1"), cell("<b>Alice</b>")],
				vec![cell("2"), cell("Bob & Co")],
			],
			sort_query: Some("name".to_string()),
			page: None,
		}
	}

	#[rstest]
	fn test_bootstrap5_markup(table: RenderedTable) {
		let html = Bootstrap5.render(&table, &TableSettings::default());

		assert_see_in_order(
			&html,
			&[
				"<div class=\"table-responsive\">",
				"<table class=\"table",
				"<thead>",
				"<tr",
				"<th class=\"align-middle\" scope=\"col\">",
				"Id",
				"</th>",
				"<th class=\"align-middle\" scope=\"col\">",
				"href=\"?sort=-name\"",
				"title=\"Sort descending\"",
				"<i>icon-sort-desc</i>",
				"Name",
				"</th>",
				"</tr>",
				"</thead>",
				"<tbody>",
				"<td class=\"align-middle\">1</td>",
				"&lt;b&gt;Alice&lt;/b&gt;</td>",
				"Bob &amp; Co</td>",
				"</tbody>",
				"</table>",
				"</div>",
			],
		);
		assert!(!html.contains("<b>Alice"));
		assert!(!html.contains("<nav"));
	}

	#[rstest]
	fn test_plain_has_no_classes(table: RenderedTable) {
		let html = Plain.render(&table, &TableSettings::default());

		assert!(!html.contains("class="));
		assert!(!html.contains("<div"));
		assert_see_in_order(
			&html,
			&["<table>", "<th scope=\"col\">", "Id", "<a href=\"?sort=-name\"", "Name", "<td>1</td>"],
		);
	}

	#[rstest]
	#[case(ThemeKind::Bootstrap5, "<td class=\"text-center p-3\" colspan=\"2\">Nothing here</td>")]
	#[case(ThemeKind::Plain, "<td colspan=\"2\">Nothing here</td>")]
	fn test_empty_message(mut table: RenderedTable, #[case] kind: ThemeKind, #[case] expected: &str) {
		table.rows.clear();
		let settings = TableSettings {
			empty_message: "Nothing here".to_string(),
			..Default::default()
		};

		let html = theme_for(kind).render(&table, &settings);
		assert!(html.contains(expected), "missing empty row in:\n{}", html);
	}

	#[rstest]
	fn test_column_classes_follow_theme_class(mut table: RenderedTable) {
		table.rows[0][1].css_class = "fw-bold".to_string();
		let html = Bootstrap5.render(&table, &TableSettings::default());
		assert!(html.contains("<td class=\"align-middle fw-bold\">"));
	}

	#[rstest]
	fn test_pagination_keeps_sort(mut table: RenderedTable) {
		table.page = Some(PageInfo {
			current: 2,
			total_pages: 3,
			first_item: 21,
			last_item: 40,
			total_items: 45,
		});

		let html = Bootstrap5.render(&table, &TableSettings::default());

		assert_see_in_order(
			&html,
			&[
				"</table>",
				"<ul class=\"pagination",
				"href=\"?sort=name&amp;page=1\" rel=\"prev\"",
				"aria-current=\"page\"",
				"2 / 3",
				"href=\"?sort=name&amp;page=3\" rel=\"next\"",
				"</nav>",
			],
		);
	}

	#[rstest]
	fn test_single_page_has_no_pagination(mut table: RenderedTable) {
		table.page = Some(PageInfo {
			current: 1,
			total_pages: 1,
			first_item: 1,
			last_item: 2,
			total_items: 2,
		});
		let html = Plain.render(&table, &TableSettings::default());
		assert!(!html.contains("<nav"));
	}

	#[rstest]
	fn test_custom_params() {
		let settings = TableSettings {
			sort_param: "order".to_string(),
			page_param: "p".to_string(),
			..Default::default()
		};
		assert_eq!(sort_href(&settings, "-id"), "?order=-id");
		assert_eq!(page_href(&settings, Some("id"), 2), "?order=id&p=2");
		assert_eq!(page_href(&settings, None, 2), "?p=2");
	}

	#[rstest]
	#[case("-c++", "?sort=-c%2B%2B")]
	#[case("name & co", "?sort=name%20%26%20co")]
	#[case("50%#x", "?sort=50%25%23x")]
	fn test_sort_href_is_percent_encoded(#[case] query: &str, #[case] expected: &str) {
		let href = sort_href(&TableSettings::default(), query);
		assert_eq!(href, expected);

		let value = href.trim_start_matches("?sort=");
		assert_eq!(urlencoding::decode(value).unwrap(), query);
	}

	#[rstest]
	fn test_page_href_encodes_param_names() {
		let settings = TableSettings {
			sort_param: "sort by".to_string(),
			page_param: "p&q".to_string(),
			..Default::default()
		};
		assert_eq!(page_href(&settings, Some("-c++"), 2), "?sort%20by=-c%2B%2B&p%26q=2");
	}

	#[rstest]
	#[case(ThemeKind::Bootstrap5, "bootstrap5")]
	#[case(ThemeKind::Plain, "plain")]
	fn test_theme_for(#[case] kind: ThemeKind, #[case] name: &str) {
		assert_eq!(theme_for(kind).name(), name);
	}
}
