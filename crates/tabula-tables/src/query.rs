//! Applying a sort state to adapter queries

use crate::column_set::ColumnSet;
use crate::sort_state::SortState;
use tabula_query::QueryAdapter;

/// Orders `query` according to `state`
///
/// The active column's custom sort runs when it has one; otherwise the query
/// is ordered by the column's sort key. An unsorted state, or one whose key
/// is not a sortable column of `columns`, returns `query` as is.
pub fn apply_sort<A: QueryAdapter>(
	adapter: &A,
	columns: &ColumnSet<A::Row, A::Query>,
	state: &SortState,
	query: A::Query,
) -> A::Query {
	let (Some(column), Some(direction)) = (state.active_column(columns), state.direction()) else {
		return query;
	};
	match column.custom_sort() {
		Some(sort) => sort(query, direction),
		None => adapter.order_by(query, column.field(), direction),
	}
}
