//! Resource wrappers and pagination driven through the in-process mock.
//!
//! Each test registers the rules the call should hit, runs it, then inspects
//! what the mock actually received.

use std::sync::Arc;

use easypost::mock::MockTransport;
use easypost::*;
use rust_decimal_macros::dec;
use serde::Deserialize;
use serde_json::json;

fn client(mock: &Arc<MockTransport>) -> EasyPostClient {
    EasyPostClient::with_transport(ClientConfig::new("EZTK_test"), mock.clone()).unwrap()
}

fn ctx() -> RequestContext {
    RequestContext::new()
}

// ---------------------------------------------------------------------------
// Generic pagination
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Widget {
    id: String,
}

impl HasId for Widget {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

#[derive(Debug, Deserialize)]
struct WidgetPage {
    widgets: Vec<Widget>,
    has_more: bool,
}

impl Paginated for WidgetPage {
    type Item = Widget;

    fn items(&self) -> &[Widget] {
        &self.widgets
    }

    fn has_more(&self) -> bool {
        self.has_more
    }
}

#[tokio::test]
async fn test_widget_listing_then_next_page() {
    let mock = Arc::new(
        MockTransport::new()
            .on(
                Method::GET,
                r"v2/widgets\?page_size=2$",
                200,
                r#"{"widgets":[{"id":"w_1"},{"id":"w_2"}],"has_more":true}"#,
            )
            .on(
                Method::GET,
                r"v2/widgets\?before_id=",
                200,
                r#"{"widgets":[{"id":"w_3"}],"has_more":false}"#,
            ),
    );
    let client = client(&mock);

    let first: WidgetPage = client
        .get(&ctx(), "widgets", &ListOptions::with_page_size(2).to_query())
        .await
        .unwrap();
    assert_eq!(first.widgets.len(), 2);

    let second: WidgetPage = client.next_page(&ctx(), "widgets", &first, None).await.unwrap();
    assert_eq!(second.widgets[0].id, "w_3");
    assert!(second.is_exhausted());

    let sent = mock.received();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].query_param("before_id").as_deref(), Some("w_2"));
    assert_eq!(sent[1].query_param("page_size"), None);
}

#[tokio::test]
async fn test_empty_page_stops_without_a_request() {
    let mock = Arc::new(MockTransport::new());
    let client = client(&mock);
    let page = WidgetPage {
        widgets: Vec::new(),
        has_more: true,
    };

    let err = client
        .next_page(&ctx(), "widgets", &page, Some(10))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EndOfPagination);
    assert!(mock.received().is_empty());
}

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

const ADDRESS: &str = r#"{
    "id": "adr_123",
    "object": "Address",
    "street1": "417 MONTGOMERY ST FL 5",
    "city": "SAN FRANCISCO",
    "created_at": "2022-08-09T21:24:15Z"
}"#;

#[tokio::test]
async fn test_create_address_with_verify() {
    let mock = Arc::new(MockTransport::new().on(Method::POST, r"v2/addresses$", 201, ADDRESS));
    let client = client(&mock);
    let input = Address {
        street1: Some("417 Montgomery Street".into()),
        city: Some("San Francisco".into()),
        ..Default::default()
    };
    let options = CreateAddressOptions {
        verify: vec!["delivery".into()],
        verify_strict: Vec::new(),
    };

    let created = client
        .create_address(&ctx(), &input, Some(&options))
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("adr_123"));
    assert_eq!(created.created_at.format(), "2022-08-09T21:24:15Z");

    let body = mock.received()[0].body_json().unwrap();
    assert_eq!(
        body,
        json!({
            "address": {"street1": "417 Montgomery Street", "city": "San Francisco"},
            "verify": ["delivery"]
        })
    );
}

#[tokio::test]
async fn test_verify_address_unwraps_nested_result() {
    let wrapped = format!(r#"{{"address": {ADDRESS}}}"#);
    let mock = Arc::new(MockTransport::new().on(
        Method::GET,
        r"v2/addresses/adr_123/verify$",
        200,
        &wrapped,
    ));
    let client = client(&mock);

    let verified = client.verify_address(&ctx(), "adr_123").await.unwrap();
    assert_eq!(verified.street1.as_deref(), Some("417 MONTGOMERY ST FL 5"));
    assert!(mock.received()[0].body.is_none());
}

#[tokio::test]
async fn test_create_and_verify_address() {
    let wrapped = format!(r#"{{"address": {ADDRESS}}}"#);
    let mock = Arc::new(MockTransport::new().on(
        Method::POST,
        r"v2/addresses/create_and_verify$",
        200,
        &wrapped,
    ));
    let client = client(&mock);
    let input = Address {
        street1: Some("417 Montgomery Street".into()),
        ..Default::default()
    };

    let verified = client
        .create_and_verify_address(&ctx(), &input, None)
        .await
        .unwrap();
    assert_eq!(verified.id.as_deref(), Some("adr_123"));
    assert_eq!(
        mock.received()[0].body_json(),
        Some(json!({"address": {"street1": "417 Montgomery Street"}}))
    );
}

#[tokio::test]
async fn test_get_address_not_found() {
    let mock = Arc::new(MockTransport::new().on(
        Method::GET,
        r"v2/addresses/adr_missing$",
        404,
        r#"{"error":{"code":"NOT_FOUND","message":"The requested resource could not be found.","errors":[]}}"#,
    ));
    let client = client(&mock);

    let err = client.get_address(&ctx(), "adr_missing").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Remote);
    let api = err.as_api_error().unwrap();
    assert!(api.is_not_found());
    assert_eq!(api.code.as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_address_id_stays_one_path_segment() {
    let mock = Arc::new(MockTransport::new().on(Method::GET, r"v2/addresses/", 200, ADDRESS));
    let client = client(&mock);

    client.get_address(&ctx(), "a/b?c").await.unwrap();
    client.get_address(&ctx(), "../users/me?x=1").await.unwrap();
    client.verify_address(&ctx(), "x#y").await.unwrap_err();

    let sent = mock.received();
    assert_eq!(sent[0].url.path(), "/v2/addresses/a%2Fb%3Fc");
    assert_eq!(sent[0].url.query(), None);
    assert_eq!(sent[1].url.path(), "/v2/addresses/..%2Fusers%2Fme%3Fx=1");
    assert_eq!(sent[1].url.query(), None);
    assert_eq!(sent[2].url.path(), "/v2/addresses/x%23y/verify");
    assert_eq!(sent[2].url.fragment(), None);

    let err = client.get_address(&ctx(), "..").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert_eq!(mock.received().len(), 3);
}

#[tokio::test]
async fn test_address_pages_drop_original_filters() {
    let mock = Arc::new(MockTransport::new().on(
        Method::GET,
        r"v2/addresses\?",
        200,
        r#"{"addresses":[{"id":"adr_1"},{"id":"adr_2"}],"has_more":true}"#,
    ));
    let client = client(&mock);
    let options = ListOptions {
        start_datetime: "2024-01-01T00:00:00Z".parse().unwrap(),
        page_size: Some(2),
        ..Default::default()
    };

    let first = client.list_addresses(&ctx(), &options).await.unwrap();
    let _second = client.next_address_page(&ctx(), &first, Some(5)).await.unwrap();

    let sent = mock.received();
    assert_eq!(
        sent[0].query_param("start_datetime").as_deref(),
        Some("2024-01-01T00:00:00Z")
    );
    assert_eq!(sent[1].query_param("before_id").as_deref(), Some("adr_2"));
    assert_eq!(sent[1].query_param("page_size").as_deref(), Some("5"));
    assert_eq!(sent[1].query_param("start_datetime"), None);
}

#[tokio::test]
async fn test_next_page_with_missing_last_id() {
    let mock = Arc::new(MockTransport::new());
    let client = client(&mock);
    let page = ListAddressResult {
        addresses: vec![Address::default()],
        has_more: true,
    };

    let err = client
        .next_address_page(&ctx(), &page, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(mock.received().is_empty());
}

// ---------------------------------------------------------------------------
// Shipments
// ---------------------------------------------------------------------------

const SHIPMENT: &str = r#"{
    "id": "shp_123",
    "object": "Shipment",
    "reference": "123",
    "options": {"label_format": "PNG", "invoice_number": "123"},
    "rates": [
        {"id": "rate_usps", "carrier": "USPS", "service": "Priority", "rate": "7.58", "currency": "USD"},
        {"id": "rate_ups", "carrier": "UPS", "service": "Ground", "rate": "9.12", "currency": "USD"}
    ]
}"#;

#[tokio::test]
async fn test_create_and_buy_lowest_rate() {
    let bought = r#"{"id": "shp_123", "postage_label": {"id": "pl_1", "label_url": "https://labels.test/pl_1.png"}, "tracking_code": "9400100000000000000000"}"#;
    let mock = Arc::new(
        MockTransport::new()
            .on(Method::POST, r"v2/shipments$", 201, SHIPMENT)
            .on(Method::POST, r"v2/shipments/shp_123/buy$", 200, bought),
    );
    let client = client(&mock);
    let input = Shipment {
        reference: Some("123".into()),
        parcel: Some(Parcel {
            weight: Some(21.2),
            ..Default::default()
        }),
        ..Default::default()
    };

    let shipment = client.create_shipment(&ctx(), &input).await.unwrap();
    assert_eq!(shipment.options.as_ref().unwrap().label_format.as_deref(), Some("PNG"));
    let rate = shipment.lowest_rate(&[]).unwrap();
    assert_eq!(rate.rate, Some(dec!(7.58)));

    let bought = client
        .buy_shipment(&ctx(), "shp_123", rate, None)
        .await
        .unwrap();
    assert!(bought.postage_label.is_some());

    let sent = mock.received();
    assert_eq!(
        sent[0].body_json(),
        Some(json!({"shipment": {"reference": "123", "parcel": {"weight": 21.2}}}))
    );
    assert_eq!(sent[1].body_json(), Some(json!({"rate": {"id": "rate_usps"}})));
}

#[tokio::test]
async fn test_buy_rejects_rate_without_id() {
    let mock = Arc::new(MockTransport::new());
    let client = client(&mock);
    let err = client
        .buy_shipment(&ctx(), "shp_123", &Rate::default(), Some("100"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
}

#[tokio::test]
async fn test_rerate_unwraps_rates() {
    let mock = Arc::new(MockTransport::new().on(
        Method::POST,
        r"v2/shipments/shp_123/rerate$",
        200,
        r#"{"rates": [{"id": "rate_new", "carrier": "USPS", "rate": "6.95"}]}"#,
    ));
    let client = client(&mock);

    let rates = client.rerate_shipment(&ctx(), "shp_123").await.unwrap();
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].rate, Some(dec!(6.95)));
    assert!(mock.received()[0].body.is_none());
}

#[tokio::test]
async fn test_label_insure_refund() {
    let mock = Arc::new(
        MockTransport::new()
            .on(
                Method::GET,
                r"v2/shipments/shp_123/label\?file_format=ZPL$",
                200,
                r#"{"id": "shp_123", "postage_label": {"label_zpl_url": "https://labels.test/pl_1.zpl"}}"#,
            )
            .on(
                Method::POST,
                r"v2/shipments/shp_123/insure$",
                200,
                r#"{"id": "shp_123", "insurance": "100.00"}"#,
            )
            .on(
                Method::POST,
                r"v2/shipments/shp_123/refund$",
                200,
                r#"{"id": "shp_123", "refund_status": "submitted"}"#,
            ),
    );
    let client = client(&mock);

    let labelled = client
        .get_shipment_label(&ctx(), "shp_123", "ZPL")
        .await
        .unwrap();
    assert!(labelled.postage_label.unwrap().label_zpl_url.is_some());

    let insured = client.insure_shipment(&ctx(), "shp_123", "100").await.unwrap();
    assert_eq!(insured.insurance.as_deref(), Some("100.00"));

    let refunded = client.refund_shipment(&ctx(), "shp_123").await.unwrap();
    assert_eq!(refunded.refund_status.as_deref(), Some("submitted"));

    let sent = mock.received();
    assert_eq!(sent[1].body_json(), Some(json!({"amount": "100"})));
    assert!(sent[2].body.is_none());
}

#[tokio::test]
async fn test_smartrates_unwrap_result() {
    let mock = Arc::new(MockTransport::new().on(
        Method::GET,
        r"v2/shipments/shp_123/smartrate$",
        200,
        r#"{"result": [{"id": "rate_1", "carrier": "USPS", "rate": "7.58",
            "time_in_transit": {"percentile_50": 1, "percentile_75": 2, "percentile_85": 2,
            "percentile_90": 3, "percentile_95": 3, "percentile_97": 4, "percentile_99": 5}}]}"#,
    ));
    let client = client(&mock);

    let smartrates = client.get_shipment_smartrates(&ctx(), "shp_123").await.unwrap();
    assert_eq!(smartrates.len(), 1);
    assert_eq!(smartrates[0].rate.id.as_deref(), Some("rate_1"));
    assert_eq!(smartrates[0].rate.rate, Some(dec!(7.58)));
    assert_eq!(smartrates[0].time_in_transit.percentile_50, Some(1));
    assert_eq!(smartrates[0].time_in_transit.percentile_99, Some(5));
    assert_eq!(mock.received()[0].method, Method::GET);
}

#[tokio::test]
async fn test_create_parcel_then_ship_by_id() {
    let mock = Arc::new(
        MockTransport::new()
            .on(
                Method::POST,
                r"v2/parcels$",
                200,
                r#"{"id": "prcl_123", "length": 10.2, "weight": 65.9}"#,
            )
            .on(Method::GET, r"v2/parcels/prcl_123$", 200, r#"{"id": "prcl_123"}"#)
            .on(
                Method::POST,
                r"v2/shipments$",
                200,
                r#"{"id": "shp_123", "parcel": {"id": "prcl_123"}}"#,
            ),
    );
    let client = client(&mock);

    let parcel = client
        .create_parcel(
            &ctx(),
            &Parcel {
                length: Some(10.2),
                weight: Some(65.9),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(parcel.id.as_deref(), Some("prcl_123"));

    let fetched = client.get_parcel(&ctx(), "prcl_123").await.unwrap();
    assert_eq!(fetched.id, parcel.id);

    let shipment = client
        .create_shipment(
            &ctx(),
            &Shipment {
                parcel: Some(Parcel {
                    id: parcel.id.clone(),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(shipment.parcel.unwrap().id.as_deref(), Some("prcl_123"));

    let sent = mock.received();
    assert_eq!(
        sent[0].body_json(),
        Some(json!({"parcel": {"length": 10.2, "weight": 65.9}}))
    );
    assert_eq!(
        sent[2].body_json(),
        Some(json!({"shipment": {"parcel": {"id": "prcl_123"}}}))
    );
}

#[tokio::test]
async fn test_list_shipments_with_filters() {
    let mock = Arc::new(MockTransport::new().on(
        Method::GET,
        r"v2/shipments\?",
        200,
        r#"{"shipments": [{"id": "shp_1"}], "has_more": false}"#,
    ));
    let client = client(&mock);
    let options = ListShipmentsOptions {
        list: ListOptions::with_page_size(5),
        purchased: Some(false),
        include_children: Some(true),
    };

    let page = client.list_shipments(&ctx(), &options).await.unwrap();
    assert_eq!(page.shipments.len(), 1);
    assert!(page.is_exhausted());

    let sent = mock.received();
    assert_eq!(sent[0].query_param("purchased").as_deref(), Some("false"));
    assert_eq!(sent[0].query_param("include_children").as_deref(), Some("true"));

    let next = client.next_shipment_page(&ctx(), &page, None).await.unwrap();
    assert_eq!(next.shipments[0].id.as_deref(), Some("shp_1"));
    let sent = mock.received();
    assert_eq!(sent[1].query_param("before_id").as_deref(), Some("shp_1"));
    assert_eq!(sent[1].query_param("purchased"), None);
}

// ---------------------------------------------------------------------------
// Pickups
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_pickup_lifecycle() {
    let mock = Arc::new(
        MockTransport::new()
            .on(
                Method::POST,
                r"v2/pickups$",
                201,
                r#"{"id": "pickup_1", "status": "unknown", "pickup_rates": [{"id": "prate_1", "carrier": "USPS", "service": "NextDay", "rate": "0.00"}]}"#,
            )
            .on(
                Method::POST,
                r"v2/pickups/pickup_1/buy$",
                200,
                r#"{"id": "pickup_1", "status": "scheduled", "confirmation": "WTC123"}"#,
            )
            .on(
                Method::POST,
                r"v2/pickups/pickup_1/cancel$",
                200,
                r#"{"id": "pickup_1", "status": "canceled"}"#,
            ),
    );
    let client = client(&mock);
    let request = Pickup {
        reference: Some("my-pickup".into()),
        min_datetime: "2024-03-01T10:00:00Z".parse().unwrap(),
        max_datetime: "2024-03-01T17:00:00Z".parse().unwrap(),
        instructions: Some("Special pickup instructions".into()),
        is_account_address: Some(false),
        ..Default::default()
    };

    let pickup = client.create_pickup(&ctx(), &request).await.unwrap();
    let rate = &pickup.pickup_rates[0];

    let bought = client.buy_pickup(&ctx(), "pickup_1", rate).await.unwrap();
    assert_eq!(bought.status.as_deref(), Some("scheduled"));
    assert_eq!(bought.confirmation.as_deref(), Some("WTC123"));

    let cancelled = client.cancel_pickup(&ctx(), "pickup_1").await.unwrap();
    assert_eq!(cancelled.status.as_deref(), Some("canceled"));

    let sent = mock.received();
    let create_body = sent[0].body_json().unwrap();
    assert_eq!(create_body["pickup"]["min_datetime"], "2024-03-01T10:00:00Z");
    assert_eq!(create_body["pickup"]["is_account_address"], false);
    assert_eq!(sent[1].body_json(), Some(json!({"carrier": "USPS", "service": "NextDay"})));
    assert!(sent[2].body.is_none());
}

#[tokio::test]
async fn test_buy_pickup_needs_carrier_and_service() {
    let mock = Arc::new(MockTransport::new());
    let client = client(&mock);
    let rate = PickupRate {
        carrier: Some("USPS".into()),
        ..Default::default()
    };
    let err = client.buy_pickup(&ctx(), "pickup_1", &rate).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(mock.received().is_empty());
}

// ---------------------------------------------------------------------------
// Billing
// ---------------------------------------------------------------------------

const PAYMENT_METHODS: &str = r#"{"id": "summary_123", "primary_payment_method": {"id": "card_123", "last4": "1234"}, "secondary_payment_method": {"id": "bank_123", "bank_name": "Mock Bank"}}"#;

fn billing_mock() -> Arc<MockTransport> {
    Arc::new(
        MockTransport::new()
            .on(Method::POST, r"v2\/bank_accounts\/\S*\/charges$", 200, "{}")
            .on(Method::POST, r"v2\/credit_cards\/\S*\/charges$", 200, "{}")
            .on(Method::DELETE, r"v2\/bank_accounts\/\S*$", 200, "{}")
            .on(Method::DELETE, r"v2\/credit_cards\/\S*$", 200, "{}")
            .on(Method::GET, r"v2\/payment_methods$", 200, PAYMENT_METHODS),
    )
}

#[tokio::test]
async fn test_fund_wallet_from_primary_card() {
    let mock = billing_mock();
    let client = client(&mock);

    client
        .fund_wallet(&ctx(), "2000", PaymentMethodPriority::Primary)
        .await
        .unwrap();

    let sent = mock.received();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].url.path(), "/v2/credit_cards/card_123/charges");
    assert_eq!(sent[1].body_json(), Some(json!({"amount": "2000"})));
}

#[tokio::test]
async fn test_delete_secondary_bank_account() {
    let mock = billing_mock();
    let client = client(&mock);

    client
        .delete_payment_method(&ctx(), PaymentMethodPriority::Secondary)
        .await
        .unwrap();

    let sent = mock.received();
    assert_eq!(sent[1].method, Method::DELETE);
    assert_eq!(sent[1].url.path(), "/v2/bank_accounts/bank_123");
}

#[tokio::test]
async fn test_retrieve_payment_methods() {
    let mock = billing_mock();
    let client = client(&mock);

    let methods = client.retrieve_payment_methods(&ctx()).await.unwrap();
    assert_eq!(methods.id.as_deref(), Some("summary_123"));
    let primary = methods.get(PaymentMethodPriority::Primary).unwrap();
    assert_eq!(primary.endpoint(), Some("credit_cards"));
}

#[tokio::test]
async fn test_unknown_payment_method_prefix() {
    let mock = Arc::new(MockTransport::new().on(
        Method::GET,
        r"v2/payment_methods$",
        200,
        r#"{"id": "summary_123", "primary_payment_method": {"id": "pm_123"}}"#,
    ));
    let client = client(&mock);

    let err = client
        .fund_wallet(&ctx(), "2000", PaymentMethodPriority::Primary)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);

    let err = client
        .delete_payment_method(&ctx(), PaymentMethodPriority::Secondary)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert_eq!(mock.received().len(), 2);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

const ME: &str = r#"{"id": "user_1", "object": "User", "name": "Parent", "balance": "25.00", "children": [{"id": "user_2", "parent_id": "user_1"}]}"#;

fn users_mock() -> Arc<MockTransport> {
    Arc::new(
        MockTransport::new()
            .on(Method::GET, r"v2/users$", 200, ME)
            .on(Method::POST, r"v2/users$", 201, r#"{"id": "user_2", "name": "Test User"}"#)
            .on(Method::GET, r"v2/users/user_2$", 200, r#"{"id": "user_2", "parent_id": "user_1"}"#)
            .on(Method::PUT, r"v2/users/user_1$", 200, r#"{"id": "user_1", "name": "Renamed"}"#)
            .on(
                Method::PATCH,
                r"v2/users/user_1/brand$",
                200,
                r##"{"id": "brd_1", "user_id": "user_1", "color": "#123456"}"##,
            )
            .on(Method::DELETE, r"v2/users/user_2$", 204, ""),
    )
}

#[tokio::test]
async fn test_retrieve_me_and_get_child() {
    let mock = users_mock();
    let client = client(&mock);

    let me = client.retrieve_me(&ctx()).await.unwrap();
    assert_eq!(me.id.as_deref(), Some("user_1"));
    assert_eq!(me.balance, Some(dec!(25.00)));
    let child_id = me.children[0].id.as_deref().unwrap();

    let child = client.get_user(&ctx(), child_id).await.unwrap();
    assert_eq!(child.parent_id.as_deref(), Some("user_1"));

    let sent = mock.received();
    assert_eq!(sent[0].url.path(), "/v2/users");
    assert_eq!(sent[1].url.path(), "/v2/users/user_2");
}

#[tokio::test]
async fn test_create_update_delete_user() {
    let mock = users_mock();
    let client = client(&mock);

    let created = client
        .create_user(
            &ctx(),
            &UserOptions {
                name: Some("Test User".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.name.as_deref(), Some("Test User"));

    let updated = client
        .update_user(
            &ctx(),
            "user_1",
            &UserOptions {
                name: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name.as_deref(), Some("Renamed"));

    client.delete_user(&ctx(), "user_2").await.unwrap();

    let sent = mock.received();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0].body_json(), Some(json!({"user": {"name": "Test User"}})));
    assert_eq!(sent[1].method, Method::PUT);
    assert_eq!(sent[1].body_json(), Some(json!({"user": {"name": "Renamed"}})));
    assert_eq!(sent[2].method, Method::DELETE);
    assert!(sent[2].body.is_none());
}

#[tokio::test]
async fn test_update_brand() {
    let mock = users_mock();
    let client = client(&mock);

    let brand = client
        .update_brand(
            &ctx(),
            "user_1",
            &Brand {
                color: Some("#123456".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(brand.id.as_deref(), Some("brd_1"));
    assert_eq!(brand.color.as_deref(), Some("#123456"));

    let sent = mock.received();
    assert_eq!(sent[0].method, Method::PATCH);
    assert_eq!(sent[0].body_json(), Some(json!({"brand": {"color": "#123456"}})));
}

#[tokio::test]
async fn test_user_id_is_required() {
    let mock = users_mock();
    let client = client(&mock);

    let err = client.get_user(&ctx(), "").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    let err = client.delete_user(&ctx(), "..").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(mock.received().is_empty());
}
