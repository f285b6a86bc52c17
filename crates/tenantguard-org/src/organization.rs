//! Organization domain models
//!
//! Organizations are the tenant boundary. They own memberships and every
//! resource that permission checks are scoped to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// An organization represents a tenant in the multi-tenant system.
///
/// Users can belong to multiple organizations with different roles. A
/// deactivated organization denies every check for non-superadmin users.
///
/// # Examples
///
/// ```
/// use tenantguard_org::Organization;
///
/// let org = Organization::new("Acme Corp", "acme-corp");
/// assert_eq!(org.name, "Acme Corp");
/// assert!(org.is_active);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    /// Unique identifier for the organization
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// URL-friendly slug (unique across platform)
    pub slug: String,

    /// Whether the organization is active
    pub is_active: bool,

    /// When the organization was created
    pub created_at: DateTime<Utc>,

    /// When the organization was last updated
    pub updated_at: DateTime<Utc>,

    /// Custom metadata for extensibility
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Organization {
    /// Creates a new active organization with a UUID v7 id.
    ///
    /// # Arguments
    ///
    /// * `name` - The organization name
    /// * `slug` - URL-friendly slug (must be unique)
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self::with_id(Uuid::now_v7().to_string(), name, slug)
    }

    /// Creates a new active organization with an explicit id.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            is_active: true,
            created_at: now,
            updated_at: now,
            metadata: HashMap::new(),
        }
    }

    /// Mark the organization as deactivated.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self.updated_at = Utc::now();
        self
    }
}
