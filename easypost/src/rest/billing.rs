use serde::de::IgnoredAny;
use serde::Serialize;

use super::{id_path, EasyPostClient};
use crate::context::RequestContext;
use crate::error::{EasyPostError, Result};
use crate::types::{PaymentMethodPriority, PaymentMethods};

#[derive(Serialize)]
struct FundWalletRequest<'a> {
    amount: &'a str,
}

impl EasyPostClient {
    /// GET /payment_methods
    pub async fn retrieve_payment_methods(&self, ctx: &RequestContext) -> Result<PaymentMethods> {
        self.get(ctx, "payment_methods", &[]).await
    }

    /// POST /{credit_cards|bank_accounts}/{id}/charges - Add `amount` (in
    /// cents) to the wallet from the payment method at `priority`.
    pub async fn fund_wallet(
        &self,
        ctx: &RequestContext,
        amount: &str,
        priority: PaymentMethodPriority,
    ) -> Result<()> {
        let (endpoint, id) = self.payment_method_path(ctx, priority).await?;
        let _: IgnoredAny = self
            .post(
                ctx,
                &id_path(endpoint, &id, Some("charges"))?,
                &FundWalletRequest { amount },
            )
            .await?;
        Ok(())
    }

    /// DELETE /{credit_cards|bank_accounts}/{id}
    pub async fn delete_payment_method(
        &self,
        ctx: &RequestContext,
        priority: PaymentMethodPriority,
    ) -> Result<()> {
        let (endpoint, id) = self.payment_method_path(ctx, priority).await?;
        let _: IgnoredAny = self.delete(ctx, &id_path(endpoint, &id, None)?).await?;
        Ok(())
    }

    async fn payment_method_path(
        &self,
        ctx: &RequestContext,
        priority: PaymentMethodPriority,
    ) -> Result<(&'static str, String)> {
        let methods = self.retrieve_payment_methods(ctx).await?;
        let method = methods.get(priority).ok_or_else(|| {
            EasyPostError::InvalidRequest(format!("no {priority} payment method on file"))
        })?;
        match (method.endpoint(), method.id.as_deref()) {
            (Some(endpoint), Some(id)) => Ok((endpoint, id.to_string())),
            _ => Err(EasyPostError::InvalidRequest(format!(
                "{priority} payment method {:?} is neither a credit card nor a bank account",
                method.id.as_deref().unwrap_or("")
            ))),
        }
    }
}
