pub mod generated_image;
pub mod job_handle;
