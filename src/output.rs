use std::io::Write;

use easypost::{Address, PaymentMethodPriority, PaymentMethods, Shipment};
use serde::Serialize;

use crate::error::CliError;

/// Write one record as a JSON line, or as a TSV row built from `columns`.
fn write_record<W: Write, T: Serialize>(
    writer: &mut W,
    json_mode: bool,
    record: &T,
    columns: &[&str],
) -> Result<(), CliError> {
    if json_mode {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
    } else {
        writeln!(writer, "{}", columns.join("\t"))?;
    }
    Ok(())
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// TSV: id \t name \t street1 \t city \t state \t zip \t country \t created_at
pub fn write_address<W: Write>(
    writer: &mut W,
    json_mode: bool,
    address: &Address,
) -> Result<(), CliError> {
    let created = address.created_at.format();
    let name = address.name.as_ref().or(address.company.as_ref()).cloned();
    write_record(
        writer,
        json_mode,
        address,
        &[
            opt(&address.id),
            opt(&name),
            opt(&address.street1),
            opt(&address.city),
            opt(&address.state),
            opt(&address.zip),
            opt(&address.country),
            &created,
        ],
    )
}

/// TSV: id \t status \t tracking_code \t carrier \t service \t rate \t created_at
///
/// Carrier, service and rate come from the selected rate when the shipment is
/// purchased, otherwise from the cheapest quote.
pub fn write_shipment<W: Write>(
    writer: &mut W,
    json_mode: bool,
    shipment: &Shipment,
) -> Result<(), CliError> {
    let rate = shipment
        .selected_rate
        .as_ref()
        .or_else(|| shipment.lowest_rate(&[]));
    let (carrier, service, price) = match rate {
        Some(r) => (
            opt(&r.carrier),
            opt(&r.service),
            r.rate.map(|p| p.to_string()).unwrap_or_default(),
        ),
        None => ("", "", String::new()),
    };
    let created = shipment.created_at.format();
    write_record(
        writer,
        json_mode,
        shipment,
        &[
            opt(&shipment.id),
            opt(&shipment.status),
            opt(&shipment.tracking_code),
            carrier,
            service,
            &price,
            &created,
        ],
    )
}

/// TSV, one row per configured method: priority \t id \t description
pub fn write_payment_methods<W: Write>(
    writer: &mut W,
    json_mode: bool,
    methods: &PaymentMethods,
) -> Result<(), CliError> {
    if json_mode {
        return write_record(writer, true, methods, &[]);
    }
    for priority in [PaymentMethodPriority::Primary, PaymentMethodPriority::Secondary] {
        let Some(method) = methods.get(priority) else {
            continue;
        };
        let description = match (&method.last4, &method.bank_name) {
            (Some(last4), _) => format!("{} ****{last4}", opt(&method.brand)).trim().to_string(),
            (None, Some(bank)) => bank.clone(),
            (None, None) => opt(&method.name).to_string(),
        };
        writeln!(writer, "{priority}\t{}\t{description}", opt(&method.id))?;
    }
    Ok(())
}
