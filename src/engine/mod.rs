//! Directory engine: the employee collection and the pipeline that derives
//! the visible page from it.
//!
//! The engine layer sits between the seed data (what exists) and the
//! presentation layer (what is shown). Nothing in here touches the terminal.

pub mod collate;
pub mod directory;
pub mod paginate;
pub mod query;
pub mod view;

pub use directory::{Directory, PageView};
pub use paginate::{Page, paginate, total_pages};
pub use query::{FilterCriteria, derive_visible};
pub use view::ViewState;
