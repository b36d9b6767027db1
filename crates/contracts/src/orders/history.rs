use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle of a purchase request as seen by the buyer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }

    /// Unknown or missing statuses are shown as pending
    fn from_wire(value: &str) -> Self {
        match value {
            "approved" => OrderStatus::Approved,
            "rejected" => OrderStatus::Rejected,
            _ => OrderStatus::Pending,
        }
    }
}

fn lenient_status<'de, D>(deserializer: D) -> Result<OrderStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(OrderStatus::from_wire)
        .unwrap_or_default())
}

/// `null` decodes like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One row of `GET /orders/history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderHistoryItem {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Status", default, deserialize_with = "lenient_status")]
    pub status: OrderStatus,
    #[serde(rename = "Type", default, deserialize_with = "null_as_default")]
    pub transaction_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_description: String,
    #[serde(default)]
    pub item_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_price: f64,
    #[serde(default)]
    pub item_quantity: Option<u32>,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub seller_name: Option<String>,
    #[serde(default)]
    pub seller_email: Option<String>,
    #[serde(default)]
    pub seller_phone: Option<String>,
    #[serde(default)]
    pub seller_hostel: Option<String>,
}

/// Seller contact block, released by the backend once the seller approves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellerContact<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub hostel: &'a str,
}

impl OrderHistoryItem {
    /// Quantity used for totals: missing or zero counts as one item
    pub fn effective_quantity(&self) -> u32 {
        self.item_quantity.unwrap_or(1).max(1)
    }

    pub fn line_total(&self) -> f64 {
        self.item_price * f64::from(self.effective_quantity())
    }

    /// Explicit quantity, if the backend sent a non-zero one
    pub fn explicit_quantity(&self) -> Option<u32> {
        self.item_quantity.filter(|q| *q > 0)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.item_image.as_deref().filter(|url| !url.is_empty())
    }

    /// Contact fields are only meaningful for approved orders
    pub fn seller_contact(&self) -> Option<SellerContact<'_>> {
        if self.status != OrderStatus::Approved {
            return None;
        }
        Some(SellerContact {
            name: self.seller_name.as_deref().unwrap_or_default(),
            email: self.seller_email.as_deref().unwrap_or_default(),
            phone: self.seller_phone.as_deref().filter(|p| !p.is_empty()),
            hostel: self.seller_hostel.as_deref().unwrap_or_default(),
        })
    }

    /// DOM id of the rendered card, used as the scroll target
    pub fn anchor_id(&self) -> String {
        order_anchor_id(self.id)
    }
}

pub fn order_anchor_id(id: u64) -> String {
    format!("order-{}", id)
}

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
