//! Pure list-view pipeline: filter, summarize, derive view state.

pub mod filter;
pub mod stats;
pub mod view_state;

pub use filter::{filter_entities, FilterContext, FilterState, Filterable};
pub use stats::{average_by, count_where, percentage, sum_by, StatisticsSummary, Summarize, TOTAL};
pub use view_state::{list_view_state, ListViewState};
