use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// An account or child account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recharge_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_recharge_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recharge_threshold: Option<Decimal>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub children: Vec<User>,
}

/// Fields sent when creating or updating a user. Unset fields are omitted
/// so an update leaves them unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recharge_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_recharge_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recharge_threshold: Option<Decimal>,
}

/// Branding shown on a user's tracking pages. Also the body of a brand
/// update, where only the set fields change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_href: Option<String>,
}
