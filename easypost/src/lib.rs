pub mod config;
pub mod context;
pub mod error;
#[cfg(feature = "mock")]
pub mod mock;
pub mod pagination;
pub mod rest;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Client + config
pub use config::ClientConfig;
pub use context::RequestContext;
pub use rest::EasyPostClient;

// Errors
pub use error::{ApiError, CancelReason, EasyPostError, ErrorKind, FieldError, RemoteErrorKind, Result};

// Transport seam
pub use rest::transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};

// Pagination
pub use pagination::{next_page_options, HasId, Paginated};
pub use types::ListOptions;

// Time
pub use types::Timestamp;

// Addresses
pub use types::{
    Address, AddressVerification, AddressVerificationDetails, AddressVerifications,
    CreateAddressOptions, ListAddressResult,
};

// Shipments
pub use types::{
    ListShipmentsOptions, ListShipmentsResult, Parcel, PostageLabel, Rate, Shipment,
    ShipmentOptions, SmartRate, TimeInTransit,
};

// Pickups
pub use types::{Pickup, PickupRate};

// Billing
pub use types::{PaymentMethod, PaymentMethodPriority, PaymentMethods};

// Users
pub use types::{Brand, User, UserOptions};

pub use reqwest::Method;
