use serde::{Deserialize, Serialize};

use super::{id_path, EasyPostClient};
use crate::context::RequestContext;
use crate::error::Result;
use crate::types::{Address, CreateAddressOptions, ListAddressResult, ListOptions};

/// Body of the create endpoints: the address plus verification options
/// merged into the same JSON object.
#[derive(Serialize)]
struct CreateAddressRequest<'a> {
    address: &'a Address,
    #[serde(flatten)]
    options: Option<&'a CreateAddressOptions>,
}

/// Verify endpoints nest the address one level down.
#[derive(Deserialize)]
struct AddressEnvelope {
    address: Address,
}

impl EasyPostClient {
    /// POST /addresses - Create an address, optionally verifying it.
    pub async fn create_address(
        &self,
        ctx: &RequestContext,
        address: &Address,
        options: Option<&CreateAddressOptions>,
    ) -> Result<Address> {
        let body = CreateAddressRequest { address, options };
        self.post(ctx, "addresses", &body).await
    }

    /// GET /addresses - One page of addresses, newest first.
    pub async fn list_addresses(
        &self,
        ctx: &RequestContext,
        options: &ListOptions,
    ) -> Result<ListAddressResult> {
        self.get(ctx, "addresses", &options.to_query()).await
    }

    /// GET /addresses?before_id= - The page after `page`.
    pub async fn next_address_page(
        &self,
        ctx: &RequestContext,
        page: &ListAddressResult,
        page_size: Option<u32>,
    ) -> Result<ListAddressResult> {
        self.next_page(ctx, "addresses", page, page_size).await
    }

    /// GET /addresses/{id}
    pub async fn get_address(&self, ctx: &RequestContext, address_id: &str) -> Result<Address> {
        self.get(ctx, &id_path("addresses", address_id, None)?, &[]).await
    }

    /// GET /addresses/{id}/verify - Run verification on an existing address.
    pub async fn verify_address(&self, ctx: &RequestContext, address_id: &str) -> Result<Address> {
        let envelope: AddressEnvelope = self
            .get(ctx, &id_path("addresses", address_id, Some("verify"))?, &[])
            .await?;
        Ok(envelope.address)
    }

    /// POST /addresses/create_and_verify - Create and strictly verify in one call.
    pub async fn create_and_verify_address(
        &self,
        ctx: &RequestContext,
        address: &Address,
        options: Option<&CreateAddressOptions>,
    ) -> Result<Address> {
        let body = CreateAddressRequest { address, options };
        let envelope: AddressEnvelope = self
            .post(ctx, "addresses/create_and_verify", &body)
            .await?;
        Ok(envelope.address)
    }
}
