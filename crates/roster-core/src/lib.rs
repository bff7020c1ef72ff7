//! Roster Core
//!
//! Target-independent pieces of the roster view: typed member records,
//! sort preferences, ordering, name filtering, configuration, the
//! key/value store used to remember the chosen sort order, and the view
//! logic driving a roster page.

mod config;
mod filter;
mod member;
mod order;
mod page;
mod preference;
mod view;

pub use config::RosterConfig;
pub use filter::NameFilter;
pub use member::{
    parse_counter, parse_timestamp, Member, ATTR_DUE, ATTR_LAST, ATTR_NAME, ATTR_PAID,
    ATTR_PRESENTED,
};
pub use order::{sort_by_order, SortDirection, SortField, SortOrder};
pub use page::{PageRow, RosterPage};
pub use preference::{MemoryStore, PreferenceStore, SortPreference};
pub use view::{FilterPass, RosterView, SortChange, SortPass, Startup};
