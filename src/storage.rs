//! # In-Memory Storage
//!
//! Sole owner of all record state for the process lifetime. Nothing is
//! persisted; a restart resets everything back to the seed data.
//!
//! ## Identifiers
//!
//! Milestones, gallery images and contact messages draw ids from one shared
//! monotonically increasing counter, so ids never collide across the three
//! collections (and are not dense per collection). The politician is a
//! singleton with id fixed at 1.
//!
//! ## Ordering
//!
//! - Milestones list ascending by year, ties in insertion order.
//! - Gallery images list in insertion order.
//! - Contact messages list newest first.

use std::collections::BTreeMap;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::schema::{
    ContactMessage, GalleryImage, InsertContactMessage, InsertGalleryImage, InsertMilestone,
    InsertPolitician, JourneyMilestone, MilestonePatch, Politician, PoliticianPatch,
};

pub const POLITICIAN_ID: i32 = 1;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StorageError {
    #[error("record not found")]
    NotFound,
}

#[derive(Default)]
struct Inner {
    politician: Option<Politician>,
    // BTreeMap keyed by the increasing id, so iteration order is insertion order.
    milestones: BTreeMap<i32, JourneyMilestone>,
    gallery: BTreeMap<i32, GalleryImage>,
    messages: BTreeMap<i32, ContactMessage>,
    next_id: i32,
}

impl Inner {
    fn next_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

pub struct MemStorage {
    inner: RwLock<Inner>,
}

impl MemStorage {
    pub fn new() -> Self {
        let mut inner = Inner {
            next_id: 1,
            ..Inner::default()
        };
        seed(&mut inner);

        Self {
            inner: RwLock::new(inner),
        }
    }

    pub async fn get_politician(&self) -> Option<Politician> {
        self.inner.read().await.politician.clone()
    }

    /// Replaces the singleton outright. There is only ever one politician.
    pub async fn create_politician(&self, insert: InsertPolitician) -> Politician {
        let politician = Politician {
            id: POLITICIAN_ID,
            name: insert.name,
            title: insert.title,
            introduction: insert.introduction,
            photo_url: insert.photo_url,
            email: insert.email,
            phone: insert.phone,
            address: insert.address,
            early_life: insert.early_life,
            political_motivations: insert.political_motivations,
            family: insert.family,
        };

        self.inner.write().await.politician = Some(politician.clone());
        politician
    }

    pub async fn update_politician(
        &self,
        patch: PoliticianPatch,
    ) -> Result<Politician, StorageError> {
        let mut inner = self.inner.write().await;
        let politician = inner.politician.as_mut().ok_or(StorageError::NotFound)?;

        patch.merge_into(politician);
        Ok(politician.clone())
    }

    pub async fn get_journey_milestones(&self) -> Vec<JourneyMilestone> {
        let inner = self.inner.read().await;
        let mut milestones: Vec<JourneyMilestone> = inner.milestones.values().cloned().collect();

        // Stable sort keeps insertion order for equal years.
        milestones.sort_by_key(|milestone| milestone.year);
        milestones
    }

    pub async fn create_journey_milestone(&self, insert: InsertMilestone) -> JourneyMilestone {
        let mut inner = self.inner.write().await;
        let id = inner.next_id();
        let milestone = JourneyMilestone {
            id,
            year: insert.year,
            title: insert.title,
            description: insert.description,
            category: insert.category,
            politician_id: insert.politician_id,
        };

        inner.milestones.insert(id, milestone.clone());
        milestone
    }

    pub async fn update_journey_milestone(
        &self,
        id: i32,
        patch: MilestonePatch,
    ) -> Result<JourneyMilestone, StorageError> {
        let mut inner = self.inner.write().await;
        let milestone = inner.milestones.get_mut(&id).ok_or(StorageError::NotFound)?;

        patch.merge_into(milestone);
        Ok(milestone.clone())
    }

    /// Idempotent: deleting an absent id is a no-op.
    pub async fn delete_journey_milestone(&self, id: i32) {
        self.inner.write().await.milestones.remove(&id);
    }

    pub async fn get_gallery_images(&self) -> Vec<GalleryImage> {
        self.inner.read().await.gallery.values().cloned().collect()
    }

    pub async fn create_gallery_image(&self, insert: InsertGalleryImage) -> GalleryImage {
        let mut inner = self.inner.write().await;
        let id = inner.next_id();
        let image = GalleryImage {
            id,
            title: insert.title,
            image_url: insert.image_url,
            category: insert.category,
            politician_id: insert.politician_id,
        };

        inner.gallery.insert(id, image.clone());
        image
    }

    /// Idempotent: deleting an absent id is a no-op.
    pub async fn delete_gallery_image(&self, id: i32) {
        self.inner.write().await.gallery.remove(&id);
    }

    pub async fn get_contact_messages(&self) -> Vec<ContactMessage> {
        let inner = self.inner.read().await;
        let mut messages: Vec<ContactMessage> = inner.messages.values().cloned().collect();

        // Newest first. Equal timestamps fall back to id so the most
        // recently created message still leads.
        messages.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        messages
    }

    pub async fn create_contact_message(&self, insert: InsertContactMessage) -> ContactMessage {
        let mut inner = self.inner.write().await;
        let id = inner.next_id();
        let message = ContactMessage {
            id,
            first_name: insert.first_name,
            last_name: insert.last_name,
            email: insert.email,
            subject: insert.subject,
            message: insert.message,
            created_at: Utc::now(),
        };

        inner.messages.insert(id, message.clone());
        message
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn seed(inner: &mut Inner) {
    inner.politician = Some(Politician {
        id: POLITICIAN_ID,
        name: "Hon. Rajesh Kumar".to_string(),
        title: "Serving the People".to_string(),
        introduction: "Dedicated to building a progressive, inclusive India where every citizen has the opportunity to thrive. Fighting for social justice, economic equality, and democratic values.".to_string(),
        photo_url: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=800".to_string()),
        email: "contact@rajeshkumar.inc.in".to_string(),
        phone: "+91 11 2345 6789".to_string(),
        address: "123 Gandhi Road, Central Delhi, New Delhi - 110001".to_string(),
        early_life: "Born in a small village in Uttar Pradesh, I witnessed firsthand the challenges faced by rural communities. This early exposure to grassroots issues shaped my understanding of India's diverse needs and my commitment to inclusive development.".to_string(),
        political_motivations: "Driven by the belief that politics should serve the people, not personal interests. My motivation stems from a deep desire to bridge the gap between government policies and ground-level implementation, ensuring every citizen's voice is heard and respected.".to_string(),
        family: "Blessed with a supportive family that shares my vision for a better India. My spouse and children are my pillars of strength, reminding me daily of the importance of creating a safer, more prosperous future for all Indian families.".to_string(),
    });

    let milestones = [
        (2010, "Youth Congress Leader", "Started political career as Youth Congress district coordinator, organizing awareness campaigns and grassroots mobilization programs.", "congress-green"),
        (2015, "Municipal Councillor", "Elected as Municipal Councillor, implementing water supply projects and educational infrastructure improvements in local communities.", "saffron-orange"),
        (2019, "State Assembly Member", "Won state assembly seat with 65% vote share, championing women's empowerment and agricultural reform policies.", "congress-blue"),
        (2024, "Parliamentary Candidate", "Selected as Congress candidate for upcoming Lok Sabha elections, focusing on digital India initiatives and rural healthcare expansion.", "congress-green"),
    ];

    for (year, title, description, category) in milestones {
        let id = inner.next_id();
        inner.milestones.insert(
            id,
            JourneyMilestone {
                id,
                year,
                title: title.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                politician_id: Some(POLITICIAN_ID),
            },
        );
    }

    let images = [
        ("Campaign Rally", "https://images.unsplash.com/photo-1557804506-669a67965ba0?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400", "campaign"),
        ("Public Address", "https://images.unsplash.com/photo-1562577309-2592ab84b1bc?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400", "campaign"),
        ("Food Distribution", "https://images.unsplash.com/photo-1593113598332-cd288d649433?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400", "community"),
        ("Education Initiative", "https://images.unsplash.com/photo-1497486751825-1233686d5d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400", "community"),
        ("Parliament Session", "https://images.unsplash.com/photo-1541872705-1f73c6400ec9?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400", "parliament"),
        ("Policy Meeting", "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400", "parliament"),
    ];

    for (title, image_url, category) in images {
        let id = inner.next_id();
        inner.gallery.insert(
            id,
            GalleryImage {
                id,
                title: title.to_string(),
                image_url: image_url.to_string(),
                category: category.to_string(),
                politician_id: Some(POLITICIAN_ID),
            },
        );
    }
}
