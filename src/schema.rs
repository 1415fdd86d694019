//! # Records
//!
//! Shapes of the four record kinds plus their insert payloads and patch
//! structs.
//!
//! - Insert payloads are the creation bodies: every required field must be
//!   present or deserialization fails.
//! - Patch structs carry a subset of fields; `None` keeps the stored value,
//!   `Some` overwrites it.
//!
//! All JSON field names are camelCase to match the public API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Politician {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub introduction: String,
    pub photo_url: Option<String>,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub early_life: String,
    pub political_motivations: String,
    pub family: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertPolitician {
    pub name: String,
    pub title: String,
    pub introduction: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub early_life: String,
    pub political_motivations: String,
    pub family: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PoliticianPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub introduction: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub early_life: Option<String>,
    pub political_motivations: Option<String>,
    pub family: Option<String>,
}

impl PoliticianPatch {
    pub fn merge_into(self, politician: &mut Politician) {
        if let Some(name) = self.name {
            politician.name = name;
        }
        if let Some(title) = self.title {
            politician.title = title;
        }
        if let Some(introduction) = self.introduction {
            politician.introduction = introduction;
        }
        if let Some(photo_url) = self.photo_url {
            politician.photo_url = Some(photo_url);
        }
        if let Some(email) = self.email {
            politician.email = email;
        }
        if let Some(phone) = self.phone {
            politician.phone = phone;
        }
        if let Some(address) = self.address {
            politician.address = address;
        }
        if let Some(early_life) = self.early_life {
            politician.early_life = early_life;
        }
        if let Some(political_motivations) = self.political_motivations {
            politician.political_motivations = political_motivations;
        }
        if let Some(family) = self.family {
            politician.family = family;
        }
    }
}

/// Career milestone shown on the journey timeline. `category` is one of the
/// display tags (congress-green, saffron-orange, congress-blue).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyMilestone {
    pub id: i32,
    pub year: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub politician_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertMilestone {
    pub year: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub politician_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MilestonePatch {
    pub year: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub politician_id: Option<i32>,
}

impl MilestonePatch {
    pub fn merge_into(self, milestone: &mut JourneyMilestone) {
        if let Some(year) = self.year {
            milestone.year = year;
        }
        if let Some(title) = self.title {
            milestone.title = title;
        }
        if let Some(description) = self.description {
            milestone.description = description;
        }
        if let Some(category) = self.category {
            milestone.category = category;
        }
        if let Some(politician_id) = self.politician_id {
            milestone.politician_id = Some(politician_id);
        }
    }
}

/// Gallery photo. `image_url` holds the full `data:` URI; `category` is one
/// of campaign, community, parliament ("all" exists only as a client-side
/// filter value and is never stored).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub category: String,
    pub politician_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertGalleryImage {
    pub title: String,
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub politician_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
