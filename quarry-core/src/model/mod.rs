//! Table/column model that statements are built against

pub mod column;
pub mod table;

pub use column::Column;
pub use table::Table;
