use serde::{Deserialize, Serialize};

/// How the customer wants to receive the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    Delivery,
    Retiro,
}

impl DeliveryMethod {
    /// Label used in the WhatsApp order message.
    pub fn label(self) -> &'static str {
        match self {
            Self::Delivery => "Delivery",
            Self::Retiro => "Local",
        }
    }
}

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Efectivo,
    Transferencia,
}

impl PaymentMethod {
    /// Label used in the WhatsApp order message.
    pub fn label(self) -> &'static str {
        match self {
            Self::Efectivo => "Efectivo",
            Self::Transferencia => "Transferencia",
        }
    }
}

/// Options accompanying a cart on its way into the order message.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    /// Selected delivery method.
    pub delivery_method: DeliveryMethod,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
    /// Optional free-text kiosk extras the customer typed in.
    pub extras: Option<String>,
}
