use serde::Serialize;

use super::{id_path, EasyPostClient};
use crate::context::RequestContext;
use crate::error::Result;
use crate::types::Parcel;

#[derive(Serialize)]
struct CreateParcelRequest<'a> {
    parcel: &'a Parcel,
}

impl EasyPostClient {
    /// POST /parcels - Store a parcel so shipments can refer to it by ID.
    pub async fn create_parcel(&self, ctx: &RequestContext, parcel: &Parcel) -> Result<Parcel> {
        self.post(ctx, "parcels", &CreateParcelRequest { parcel }).await
    }

    /// GET /parcels/{id}
    pub async fn get_parcel(&self, ctx: &RequestContext, parcel_id: &str) -> Result<Parcel> {
        self.get(ctx, &id_path("parcels", parcel_id, None)?, &[]).await
    }
}
