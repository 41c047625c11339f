pub mod review;
pub mod upload_status;
