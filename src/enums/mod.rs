pub mod admin_error;
pub mod request_method;
