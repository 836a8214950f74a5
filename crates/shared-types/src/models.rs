use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ── Session ─────────────────────────────────────────────

/// Authenticated account handle. Carries identity only; everything the UI
/// shows about the person lives in [`UserProfile`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
}

/// Profile record attached to an account (`userData`).
///
/// Every field is optional: an account can exist before its owner has
/// picked a role or a display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Snapshot of the session collaborator as the dashboard dispatcher sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Session {
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub user_data: Option<UserProfile>,
    #[serde(default)]
    pub is_loading: bool,
}

impl Session {
    /// A session that has not finished loading yet.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// Raw role string from the profile, if any.
    pub fn raw_role(&self) -> Option<&str> {
        self.user_data.as_ref().and_then(|d| d.role.as_deref())
    }

    /// Name to greet the user with: profile name, then email, then "there".
    pub fn display_name(&self) -> String {
        self.user_data
            .as_ref()
            .and_then(|d| d.name.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .or_else(|| self.user.as_ref().map(|u| u.email.as_str()))
            .unwrap_or("there")
            .to_string()
    }
}

// ── Marketplace ─────────────────────────────────────────

/// Marketplace account summary as listed in admin views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Produce categories offered on the marketplace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Vegetables,
    Fruits,
    Grains,
    Dairy,
    Livestock,
    #[default]
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Vegetables,
        ProductCategory::Fruits,
        ProductCategory::Grains,
        ProductCategory::Dairy,
        ProductCategory::Livestock,
        ProductCategory::Other,
    ];

    /// Parse a category string, defaulting to `Other` for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "vegetables" => ProductCategory::Vegetables,
            "fruits" => ProductCategory::Fruits,
            "grains" => ProductCategory::Grains,
            "dairy" => ProductCategory::Dairy,
            "livestock" => ProductCategory::Livestock,
            _ => ProductCategory::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Vegetables => "vegetables",
            ProductCategory::Fruits => "fruits",
            ProductCategory::Grains => "grains",
            ProductCategory::Dairy => "dairy",
            ProductCategory::Livestock => "livestock",
            ProductCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Vegetables => "Vegetables",
            ProductCategory::Fruits => "Fruits",
            ProductCategory::Grains => "Grains",
            ProductCategory::Dairy => "Dairy",
            ProductCategory::Livestock => "Livestock",
            ProductCategory::Other => "Other",
        }
    }
}

/// A produce listing published by a farmer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub farmer_id: String,
    pub name: String,
    #[serde(default)]
    pub category: ProductCategory,
    pub price: f64,
    /// Selling unit, e.g. "kg" or "crate".
    pub unit: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A piece of machinery offered for rent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Machine {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    /// Free-form type, e.g. "tractor" or "harvester".
    pub kind: String,
    pub daily_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

/// Lifecycle of a machinery rental.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "confirmed" => BookingStatus::Confirmed,
            "completed" => BookingStatus::Completed,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            _ => BookingStatus::Pending,
        }
    }
}

/// A rental of a [`Machine`] over an inclusive date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub machine_id: String,
    pub renter_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: BookingStatus,
}

impl Booking {
    /// Number of rental days, counting both ends. Zero for inverted ranges.
    pub fn days(&self) -> i64 {
        let span = (self.end_date - self.start_date).num_days();
        if span < 0 {
            0
        } else {
            span + 1
        }
    }
}

/// A completed produce sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: String,
    pub product_id: String,
    pub buyer_id: String,
    pub seller_id: String,
    pub quantity: u32,
    pub total: f64,
    pub sold_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_deserializes_without_profile() {
        let json = r#"{"user": {"uid": "u1", "email": "a@b.c"}, "user_data": null}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(session.user.is_some());
        assert!(session.user_data.is_none());
        assert!(!session.is_loading);
    }

    #[test]
    fn profile_missing_fields_default_to_none() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn display_name_prefers_profile_name() {
        let session = Session {
            user: Some(AuthUser {
                uid: "u1".into(),
                email: "ada@farm.test".into(),
            }),
            user_data: Some(UserProfile {
                name: Some("Ada".into()),
                ..Default::default()
            }),
            is_loading: false,
        };
        assert_eq!(session.display_name(), "Ada");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let session = Session {
            user: Some(AuthUser {
                uid: "u1".into(),
                email: "ada@farm.test".into(),
            }),
            user_data: Some(UserProfile {
                name: Some("  ".into()),
                ..Default::default()
            }),
            is_loading: false,
        };
        assert_eq!(session.display_name(), "ada@farm.test");
        assert_eq!(Session::default().display_name(), "there");
    }

    #[test]
    fn product_category_parses_leniently() {
        assert_eq!(
            ProductCategory::from_str_or_default(" Fruits "),
            ProductCategory::Fruits
        );
        assert_eq!(
            ProductCategory::from_str_or_default("spices"),
            ProductCategory::Other
        );
        for cat in ProductCategory::ALL {
            assert_eq!(ProductCategory::from_str_or_default(cat.as_str()), cat);
            assert_eq!(cat.label().to_lowercase(), cat.as_str());
        }
    }

    #[test]
    fn product_deserializes_from_api_json() {
        let json = r#"{
            "id": "p1", "farmer_id": "f1", "name": "Tomatoes",
            "category": "vegetables", "price": 2.5, "unit": "kg",
            "quantity": 40, "created_at": "2026-03-01T08:00:00Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category, ProductCategory::Vegetables);
        assert_eq!(product.quantity, 40);
        assert!(product.image_url.is_none());
    }

    #[test]
    fn machine_available_defaults_true() {
        let json = r#"{"id": "m1", "owner_id": "f1", "name": "Tractor 5050",
                       "kind": "tractor", "daily_rate": 120.0}"#;
        let machine: Machine = serde_json::from_str(json).unwrap();
        assert!(machine.available);
    }

    #[test]
    fn booking_status_accepts_both_spellings() {
        assert_eq!(
            BookingStatus::from_str_or_default("canceled"),
            BookingStatus::Cancelled
        );
        assert_eq!(
            BookingStatus::from_str_or_default("Confirmed"),
            BookingStatus::Confirmed
        );
        assert_eq!(BookingStatus::from_str_or_default("?"), BookingStatus::Pending);
    }

    #[test]
    fn booking_days_is_inclusive() {
        let booking = Booking {
            id: "b1".into(),
            machine_id: "m1".into(),
            renter_id: "r1".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 5, 3).unwrap(),
            status: BookingStatus::Confirmed,
        };
        assert_eq!(booking.days(), 3);

        let inverted = Booking {
            end_date: NaiveDate::from_ymd_opt(2026, 4, 30).unwrap(),
            ..booking
        };
        assert_eq!(inverted.days(), 0);
    }
}
