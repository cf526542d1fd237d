//! Service layer: where breed data comes from and where mutations go.

pub mod api;
pub mod output;
pub mod source;

pub use api::{ApiError, BreedApi, ADD_ROUTE, REMOVE_ROUTE};
pub use output::{print_one, JsonOut};
pub use source::{FileSource, SourceChain};
