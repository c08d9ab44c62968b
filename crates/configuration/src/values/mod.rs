mod secret;
pub mod uri;

pub use secret::Secret;
pub use uri::ConnectionUri;
