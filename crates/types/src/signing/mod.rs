mod request;
pub use request::{SignedForwardRequest, UnsignedForwardRequest};

mod error;
pub use error::SigningError;
