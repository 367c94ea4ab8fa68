use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{null_as_default, Address, ListOptions, Timestamp};
use crate::pagination::{HasId, Paginated};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Timestamp::is_unset")]
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Timestamp::is_unset")]
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel: Option<Parcel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ShipmentOptions>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub rates: Vec<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_rate: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postage_label: Option<PostageLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<String>,
}

impl Shipment {
    /// Cheapest priced rate, optionally restricted to the given carriers.
    pub fn lowest_rate(&self, carriers: &[&str]) -> Option<&Rate> {
        self.rates
            .iter()
            .filter(|r| {
                carriers.is_empty()
                    || r.carrier
                        .as_deref()
                        .is_some_and(|c| carriers.iter().any(|want| want.eq_ignore_ascii_case(c)))
            })
            .filter_map(|r| r.rate.map(|price| (price, r)))
            .min_by_key(|(price, _)| *price)
            .map(|(_, r)| r)
    }
}

impl HasId for Shipment {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Timestamp::is_unset")]
    pub label_date: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parcel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Ounces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predefined_package: Option<String>,
}

/// A carrier quote attached to a shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_days: Option<u32>,
}

/// A rate together with the carrier's historical delivery-time spread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmartRate {
    #[serde(flatten)]
    pub rate: Rate,
    #[serde(default)]
    pub time_in_transit: TimeInTransit,
}

/// Days in transit by percentile of past deliveries on the same lane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeInTransit {
    pub percentile_50: Option<u32>,
    pub percentile_75: Option<u32>,
    pub percentile_85: Option<u32>,
    pub percentile_90: Option<u32>,
    pub percentile_95: Option<u32>,
    pub percentile_97: Option<u32>,
    pub percentile_99: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostageLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_pdf_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_zpl_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_epl2_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_file_type: Option<String>,
    #[serde(skip_serializing_if = "Timestamp::is_unset")]
    pub label_date: Timestamp,
}

/// Filters for `GET /shipments`: the common list filters plus
/// shipment-specific ones, merged into one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListShipmentsOptions {
    pub list: ListOptions,
    pub purchased: Option<bool>,
    pub include_children: Option<bool>,
}

impl ListShipmentsOptions {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = self.list.to_query();
        if let Some(p) = self.purchased {
            query.push(("purchased".to_string(), p.to_string()));
        }
        if let Some(c) = self.include_children {
            query.push(("include_children".to_string(), c.to_string()));
        }
        query
    }
}

/// One page of `GET /shipments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListShipmentsResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub shipments: Vec<Shipment>,
    #[serde(default)]
    pub has_more: bool,
}

impl Paginated for ListShipmentsResult {
    type Item = Shipment;

    fn items(&self) -> &[Shipment] {
        &self.shipments
    }

    fn has_more(&self) -> bool {
        self.has_more
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn rate(id: &str, carrier: &str, price: &str) -> Rate {
        Rate {
            id: Some(id.into()),
            carrier: Some(carrier.into()),
            rate: Some(Decimal::from_str(price).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_lowest_rate() {
        let shipment = Shipment {
            rates: vec![
                rate("rate_1", "USPS", "7.58"),
                rate("rate_2", "UPS", "6.10"),
                rate("rate_3", "USPS", "12.00"),
                Rate {
                    id: Some("rate_4".into()),
                    carrier: Some("FedEx".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(shipment.lowest_rate(&[]).unwrap().id.as_deref(), Some("rate_2"));
        assert_eq!(shipment.lowest_rate(&["usps"]).unwrap().id.as_deref(), Some("rate_1"));
        assert!(shipment.lowest_rate(&["DHL"]).is_none());
    }

    #[test]
    fn test_rate_amount_from_string() {
        let r: Rate = serde_json::from_str(r#"{"id":"rate_1","rate":"7.58","currency":"USD"}"#).unwrap();
        assert_eq!(r.rate, Some(Decimal::from_str("7.58").unwrap()));
    }

    #[test]
    fn test_smartrate_keeps_rate_fields() {
        let sr: SmartRate = serde_json::from_str(
            r#"{"id":"rate_1","carrier":"USPS","rate":"7.58",
                "time_in_transit":{"percentile_50":1,"percentile_99":4,"percentile_75":null}}"#,
        )
        .unwrap();
        assert_eq!(sr.rate.id.as_deref(), Some("rate_1"));
        assert_eq!(sr.rate.rate, Some(Decimal::from_str("7.58").unwrap()));
        assert_eq!(sr.time_in_transit.percentile_50, Some(1));
        assert_eq!(sr.time_in_transit.percentile_99, Some(4));
        assert_eq!(sr.time_in_transit.percentile_75, None);
    }

    #[test]
    fn test_list_shipments_query_merges_filters() {
        let opts = ListShipmentsOptions {
            list: ListOptions::with_page_size(3),
            purchased: Some(true),
            include_children: None,
        };
        assert_eq!(
            opts.to_query(),
            vec![
                ("page_size".to_string(), "3".to_string()),
                ("purchased".to_string(), "true".to_string()),
            ]
        );
    }
}
