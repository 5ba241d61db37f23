pub mod credentials;
pub mod excel_read;
