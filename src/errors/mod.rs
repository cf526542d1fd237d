pub mod error_mapper;

pub use error_mapper::{
    api_unreachable_message, map_dataset_load_error, map_dataset_save_error, report_failure,
};
