pub mod config;
pub mod decoder;
pub mod error;
pub mod upload;

pub use config::ServiceConfig;
pub use decoder::decode;
pub use error::UploadError;
pub use upload::UploadController;
