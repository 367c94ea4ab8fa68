use serde::{Deserialize, Serialize};

use super::{id_path, EasyPostClient, NO_BODY};
use crate::context::RequestContext;
use crate::error::{EasyPostError, Result};
use crate::types::{ListShipmentsOptions, ListShipmentsResult, Rate, Shipment, SmartRate};

#[derive(Serialize)]
struct CreateShipmentRequest<'a> {
    shipment: &'a Shipment,
}

#[derive(Serialize)]
struct RateRef<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct BuyShipmentRequest<'a> {
    rate: RateRef<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    insurance: Option<&'a str>,
}

#[derive(Serialize)]
struct InsureShipmentRequest<'a> {
    amount: &'a str,
}

#[derive(Deserialize)]
struct RatesEnvelope {
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    rates: Vec<Rate>,
}

#[derive(Deserialize)]
struct SmartRatesEnvelope {
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    result: Vec<SmartRate>,
}

impl EasyPostClient {
    /// POST /shipments - Create a shipment; the response carries its rates.
    pub async fn create_shipment(
        &self,
        ctx: &RequestContext,
        shipment: &Shipment,
    ) -> Result<Shipment> {
        self.post(ctx, "shipments", &CreateShipmentRequest { shipment })
            .await
    }

    /// GET /shipments/{id}
    pub async fn get_shipment(&self, ctx: &RequestContext, shipment_id: &str) -> Result<Shipment> {
        self.get(ctx, &id_path("shipments", shipment_id, None)?, &[]).await
    }

    /// GET /shipments
    pub async fn list_shipments(
        &self,
        ctx: &RequestContext,
        options: &ListShipmentsOptions,
    ) -> Result<ListShipmentsResult> {
        self.get(ctx, "shipments", &options.to_query()).await
    }

    /// GET /shipments?before_id= - The page after `page`. Shipment filters
    /// from the original listing are not carried over.
    pub async fn next_shipment_page(
        &self,
        ctx: &RequestContext,
        page: &ListShipmentsResult,
        page_size: Option<u32>,
    ) -> Result<ListShipmentsResult> {
        self.next_page(ctx, "shipments", page, page_size).await
    }

    /// POST /shipments/{id}/buy - Purchase `rate`, optionally insuring for
    /// `insurance` (a decimal amount in the shipment's currency).
    pub async fn buy_shipment(
        &self,
        ctx: &RequestContext,
        shipment_id: &str,
        rate: &Rate,
        insurance: Option<&str>,
    ) -> Result<Shipment> {
        let rate_id = rate
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| EasyPostError::InvalidRequest("rate has no ID".to_string()))?;
        let body = BuyShipmentRequest {
            rate: RateRef { id: rate_id },
            insurance: insurance.filter(|i| !i.is_empty()),
        };
        self.post(ctx, &id_path("shipments", shipment_id, Some("buy"))?, &body)
            .await
    }

    /// POST /shipments/{id}/rerate - Fetch fresh rates for an unpurchased shipment.
    pub async fn rerate_shipment(&self, ctx: &RequestContext, shipment_id: &str) -> Result<Vec<Rate>> {
        let envelope: RatesEnvelope = self
            .execute(
                ctx,
                reqwest::Method::POST,
                &id_path("shipments", shipment_id, Some("rerate"))?,
                &[],
                NO_BODY,
            )
            .await?;
        Ok(envelope.rates)
    }

    /// GET /shipments/{id}/smartrate - The shipment's rates with delivery-time
    /// percentiles.
    pub async fn get_shipment_smartrates(
        &self,
        ctx: &RequestContext,
        shipment_id: &str,
    ) -> Result<Vec<SmartRate>> {
        let envelope: SmartRatesEnvelope = self
            .get(ctx, &id_path("shipments", shipment_id, Some("smartrate"))?, &[])
            .await?;
        Ok(envelope.result)
    }

    /// GET /shipments/{id}/label?file_format= - Convert the label to another format.
    pub async fn get_shipment_label(
        &self,
        ctx: &RequestContext,
        shipment_id: &str,
        file_format: &str,
    ) -> Result<Shipment> {
        let query = [("file_format".to_string(), file_format.to_string())];
        self.get(ctx, &id_path("shipments", shipment_id, Some("label"))?, &query)
            .await
    }

    /// POST /shipments/{id}/insure
    pub async fn insure_shipment(
        &self,
        ctx: &RequestContext,
        shipment_id: &str,
        amount: &str,
    ) -> Result<Shipment> {
        self.post(
            ctx,
            &id_path("shipments", shipment_id, Some("insure"))?,
            &InsureShipmentRequest { amount },
        )
        .await
    }

    /// POST /shipments/{id}/refund - Request a refund of the purchased label.
    pub async fn refund_shipment(&self, ctx: &RequestContext, shipment_id: &str) -> Result<Shipment> {
        self.execute(
            ctx,
            reqwest::Method::POST,
            &id_path("shipments", shipment_id, Some("refund"))?,
            &[],
            NO_BODY,
        )
        .await
    }
}
