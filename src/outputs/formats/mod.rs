//! Predefined implementations of [ListFormat](crate::ListFormat) and [ListBuilder](crate::ListBuilder)

mod generic_list;
pub(crate) use generic_list::GenericList;
mod indexed_list;
pub use indexed_list::{IndexedListFormat, IndexedListBuilder};
mod deindexed_list;
pub use deindexed_list::{DeindexedListFormat, DeindexedListBuilder};
mod csv_list;
pub use csv_list::{CsvListFormat, CsvListBuilder};
