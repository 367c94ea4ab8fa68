use std::io::Write;

use easypost::{
    EasyPostClient, EasyPostError, ListOptions, ListShipmentsOptions, Paginated, RequestContext,
};
use tracing::{debug, info};

use crate::cli::{PageArgs, ShipmentsArgs};
use crate::error::CliError;
use crate::output;

/// Print up to `args.pages` pages of addresses.
pub async fn list_addresses<W: Write>(
    client: &EasyPostClient,
    ctx: &RequestContext,
    args: &PageArgs,
    json_mode: bool,
    writer: &mut W,
) -> Result<usize, CliError> {
    let options = ListOptions::with_page_size(args.page_size);
    let mut page = client.list_addresses(ctx, &options).await?;
    let mut printed = 0;
    for n in 1..=args.pages {
        for address in &page.addresses {
            output::write_address(writer, json_mode, address)?;
            printed += 1;
        }
        if n == args.pages || page.is_exhausted() {
            break;
        }
        page = match client.next_address_page(ctx, &page, Some(args.page_size)).await {
            Ok(next) => next,
            Err(EasyPostError::EndOfPagination) => break,
            Err(e) => return Err(e.into()),
        };
        debug!(page = n + 1, items = page.addresses.len(), "fetched address page");
    }
    info!(printed, "addresses listed");
    Ok(printed)
}

/// Print up to `args.page.pages` pages of shipments.
pub async fn list_shipments<W: Write>(
    client: &EasyPostClient,
    ctx: &RequestContext,
    args: &ShipmentsArgs,
    json_mode: bool,
    writer: &mut W,
) -> Result<usize, CliError> {
    let options = ListShipmentsOptions {
        list: ListOptions::with_page_size(args.page.page_size),
        purchased: args.purchased,
        include_children: None,
    };
    let mut page = client.list_shipments(ctx, &options).await?;
    let mut printed = 0;
    for n in 1..=args.page.pages {
        for shipment in &page.shipments {
            output::write_shipment(writer, json_mode, shipment)?;
            printed += 1;
        }
        if n == args.page.pages || page.is_exhausted() {
            break;
        }
        page = match client
            .next_shipment_page(ctx, &page, Some(args.page.page_size))
            .await
        {
            Ok(next) => next,
            Err(EasyPostError::EndOfPagination) => break,
            Err(e) => return Err(e.into()),
        };
        debug!(page = n + 1, items = page.shipments.len(), "fetched shipment page");
    }
    info!(printed, "shipments listed");
    Ok(printed)
}
