use serde::{Deserialize, Serialize};

use super::{null_as_default, Timestamp};
use crate::error::FieldError;
use crate::pagination::{HasId, Paginated};

/// A person, place or organisation used as a shipment endpoint.
///
/// Every field is optional so the same type works for create input (only
/// the fields you set are sent) and for API output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Timestamp::is_unset")]
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Timestamp::is_unset")]
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_facility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federal_tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifications: Option<AddressVerifications>,
}

impl HasId for Address {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressVerifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip4: Option<AddressVerification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<AddressVerification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressVerification {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<FieldError>,
    #[serde(default)]
    pub details: Option<AddressVerificationDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressVerificationDetails {
    pub latitude: f64,
    pub longitude: f64,
    pub time_zone: String,
}

/// Verification checks to run while creating an address.
///
/// `verify` failures are reported on the address; `verify_strict` failures
/// reject the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAddressOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verify: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verify_strict: Vec<String>,
}

/// One page of `GET /addresses`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListAddressResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub has_more: bool,
}

impl Paginated for ListAddressResult {
    type Item = Address;

    fn items(&self) -> &[Address] {
        &self.addresses
    }

    fn has_more(&self) -> bool {
        self.has_more
    }
}
