use rand::RngCore;

use crate::db_types::VendorId;

/// Generates a fresh vendor id: 12 random bytes, hex encoded (24 characters).
pub fn generate_vendor_id() -> VendorId {
    let mut bytes = [0u8; 12];
    rand::thread_rng().fill_bytes(&mut bytes);
    VendorId(hex::encode(bytes))
}
