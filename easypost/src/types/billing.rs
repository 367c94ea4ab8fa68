use serde::{Deserialize, Serialize};

/// The account's configured payment methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethods {
    pub id: Option<String>,
    pub object: Option<String>,
    pub primary_payment_method: Option<PaymentMethod>,
    pub secondary_payment_method: Option<PaymentMethod>,
}

impl PaymentMethods {
    pub fn get(&self, priority: PaymentMethodPriority) -> Option<&PaymentMethod> {
        match priority {
            PaymentMethodPriority::Primary => self.primary_payment_method.as_ref(),
            PaymentMethodPriority::Secondary => self.secondary_payment_method.as_ref(),
        }
    }
}

/// A credit card or bank account on file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethod {
    pub id: Option<String>,
    pub object: Option<String>,
    pub name: Option<String>,
    pub last4: Option<String>,
    pub bank_name: Option<String>,
    pub brand: Option<String>,
}

impl PaymentMethod {
    /// Collection path for this method, derived from its ID prefix.
    pub fn endpoint(&self) -> Option<&'static str> {
        let id = self.id.as_deref()?;
        if id.starts_with("card_") {
            Some("credit_cards")
        } else if id.starts_with("bank_") {
            Some("bank_accounts")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethodPriority {
    Primary,
    Secondary,
}

impl std::fmt::Display for PaymentMethodPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethodPriority::Primary => write!(f, "primary"),
            PaymentMethodPriority::Secondary => write!(f, "secondary"),
        }
    }
}
