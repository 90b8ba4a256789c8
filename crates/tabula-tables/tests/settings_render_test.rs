//! Rendering driven by settings loaded from a config file


use fixtures::*;
use rstest::*;
use std::io::Write;
use tabula_conf::{TableSettings, ThemeKind};
use tabula_core::SortDirection;
use tabula_query::MemoryAdapter;
use tabula_tables::{Column, ColumnSet, Table};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
	let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

#[rstest]
#[tokio::test]
async fn test_file_settings_drive_markup(users: Vec<User>) {
	let config = write_config(
		r#"
theme = "plain"
per_page = 2
sort_param = "order"
empty_message = "Nobody here"

[icon]
sort_desc = "<em>down</em>"

[title]
sort_desc = "Reverse"
"#,
	);
	let settings = TableSettings::load(config.path()).unwrap();
	assert_eq!(settings.theme, ThemeKind::Plain);

	let columns = ColumnSet::builder()
		.column(Column::new("Name").sort_by_default(SortDirection::Ascending))
		.column(Column::new("Email"))
		.build()
		.unwrap();
	let mut table = Table::new(columns, MemoryAdapter::new(users)).with_settings(settings);
	table.init().await.unwrap();

	let html = table.render_html();
	assert_see_html_in_order(
		&html,
		&[
			"<table>",
			"<th scope=\"col\">",
			"<a href=\"?order=-name\" title=\"Reverse\"><em>down</em> Name</a>",
			"<th scope=\"col\">",
			"Email",
			"<tbody>",
			"<td>Bart</td>",
			"<td>bart@example.com</td>",
			"<td>Lisa</td>",
			"</table>",
			"href=\"?order=name&amp;page=2\" rel=\"next\"",
		],
	);
	assert_dont_see_html(&html, &["class=", "Marge"]);
}

#[rstest]
#[tokio::test]
async fn test_empty_message_spans_all_columns() {
	let columns = ColumnSet::builder()
		.column(Column::new("Id").sortable())
		.column(Column::new("Name").sortable())
		.column(Column::new("Email"))
		.build()
		.unwrap();
	let mut table = Table::new(columns, MemoryAdapter::<User>::new(Vec::new()));
	table.init().await.unwrap();

	assert!(table.render().is_empty());
	assert_see_html_in_order(
		&table.render_html(),
		&[
			"<tbody>",
			"<td class=\"text-center p-3\" colspan=\"3\">No results were found.</td>",
			"</tbody>",
		],
	);
}

#[rstest]
fn test_invalid_file_settings_are_rejected() {
	let config = write_config("per_page = 0\n");
	assert!(TableSettings::load(config.path()).is_err());
}
