mod credentials;
mod vendor_ids;

pub use credentials::{hash_password, verify_password, CredentialError};
pub use vendor_ids::generate_vendor_id;
