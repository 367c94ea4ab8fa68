use serde::Serialize;

use super::{id_path, EasyPostClient, NO_BODY};
use crate::context::RequestContext;
use crate::error::{EasyPostError, Result};
use crate::types::{Pickup, PickupRate};

#[derive(Serialize)]
struct CreatePickupRequest<'a> {
    pickup: &'a Pickup,
}

#[derive(Serialize)]
struct BuyPickupRequest<'a> {
    carrier: &'a str,
    service: &'a str,
}

impl EasyPostClient {
    /// POST /pickups - Request a pickup window; the response lists `pickup_rates`.
    pub async fn create_pickup(&self, ctx: &RequestContext, pickup: &Pickup) -> Result<Pickup> {
        self.post(ctx, "pickups", &CreatePickupRequest { pickup }).await
    }

    /// GET /pickups/{id}
    pub async fn get_pickup(&self, ctx: &RequestContext, pickup_id: &str) -> Result<Pickup> {
        self.get(ctx, &id_path("pickups", pickup_id, None)?, &[]).await
    }

    /// POST /pickups/{id}/buy - Schedule the pickup at the carrier and service of `rate`.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if `rate` lacks a carrier or service.
    pub async fn buy_pickup(
        &self,
        ctx: &RequestContext,
        pickup_id: &str,
        rate: &PickupRate,
    ) -> Result<Pickup> {
        let (Some(carrier), Some(service)) = (rate.carrier.as_deref(), rate.service.as_deref())
        else {
            return Err(EasyPostError::InvalidRequest(
                "pickup rate needs both carrier and service".to_string(),
            ));
        };
        self.post(
            ctx,
            &id_path("pickups", pickup_id, Some("buy"))?,
            &BuyPickupRequest { carrier, service },
        )
        .await
    }

    /// POST /pickups/{id}/cancel
    pub async fn cancel_pickup(&self, ctx: &RequestContext, pickup_id: &str) -> Result<Pickup> {
        self.execute(
            ctx,
            reqwest::Method::POST,
            &id_path("pickups", pickup_id, Some("cancel"))?,
            &[],
            NO_BODY,
        )
        .await
    }
}
