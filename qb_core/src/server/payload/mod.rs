pub mod dataset_response;
pub mod overview_response;
