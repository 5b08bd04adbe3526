use nps_common::Secret;

/// A request to open a vendor account. The password is only held long enough to derive its digest.
#[derive(Debug, Clone)]
pub struct NewVendorRequest {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
    pub bank_account: String,
    pub store_name: String,
}
