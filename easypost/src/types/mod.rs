mod address;
mod billing;
mod datetime;
mod page;
mod pickup;
mod shipment;
mod user;

use serde::{Deserialize, Deserializer};

pub use address::{
    Address, AddressVerification, AddressVerificationDetails, AddressVerifications,
    CreateAddressOptions, ListAddressResult,
};
pub use billing::{PaymentMethod, PaymentMethodPriority, PaymentMethods};
pub use datetime::Timestamp;
pub use page::ListOptions;
pub use pickup::{Pickup, PickupRate};
pub use shipment::{
    ListShipmentsOptions, ListShipmentsResult, Parcel, PostageLabel, Rate, Shipment,
    ShipmentOptions, SmartRate, TimeInTransit,
};
pub use user::{Brand, User, UserOptions};

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
