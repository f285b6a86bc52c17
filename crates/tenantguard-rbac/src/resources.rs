//! # Resource Types
//!
//! Resource types that carry a resource-specific role requirement. The
//! check is deliberately coarse: it looks only at the caller's role (and,
//! for organizations, the organization id), never at the resource row.
//! Resource types not listed here carry no extra requirement.

use serde::{Deserialize, Serialize};

use tenantguard_org::OrganizationRole;

/// Resource types with a resource-specific check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Posts (Writer or above).
    Post,
    /// The organization itself (Editor or above, same organization).
    Organization,
    /// Organization members (Editor or above).
    Member,
    /// User records (Editor or above).
    User,
}

impl ResourceType {
    /// Get the string representation of the resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Post => "post",
            ResourceType::Organization => "organization",
            ResourceType::Member => "member",
            ResourceType::User => "user",
        }
    }

    /// Parse resource type from string representation (case-sensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use tenantguard_rbac::ResourceType;
    ///
    /// assert_eq!(ResourceType::parse("post"), Some(ResourceType::Post));
    /// assert_eq!(ResourceType::parse("comment"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "post" => Some(ResourceType::Post),
            "organization" => Some(ResourceType::Organization),
            "member" => Some(ResourceType::Member),
            "user" => Some(ResourceType::User),
            _ => None,
        }
    }

    /// Lowest role that passes the resource-specific check.
    pub fn minimum_role(&self) -> OrganizationRole {
        match self {
            ResourceType::Post => OrganizationRole::Writer,
            ResourceType::Organization | ResourceType::Member | ResourceType::User => {
                OrganizationRole::Editor
            }
        }
    }

    /// Whether the resource id must equal the member's organization id.
    pub fn requires_same_organization(&self) -> bool {
        matches!(self, ResourceType::Organization)
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_parsing() {
        assert_eq!(ResourceType::parse("post"), Some(ResourceType::Post));
        assert_eq!(ResourceType::parse("organization"), Some(ResourceType::Organization));
        assert_eq!(ResourceType::parse("member"), Some(ResourceType::Member));
        assert_eq!(ResourceType::parse("user"), Some(ResourceType::User));
        assert_eq!(ResourceType::parse("Post"), None);
        assert_eq!(ResourceType::parse("invoice"), None);
    }

    #[test]
    fn test_minimum_roles() {
        assert_eq!(ResourceType::Post.minimum_role(), OrganizationRole::Writer);
        assert_eq!(ResourceType::Organization.minimum_role(), OrganizationRole::Editor);
        assert_eq!(ResourceType::Member.minimum_role(), OrganizationRole::Editor);
        assert_eq!(ResourceType::User.minimum_role(), OrganizationRole::Editor);
    }

    #[test]
    fn test_same_organization_requirement() {
        assert!(ResourceType::Organization.requires_same_organization());
        assert!(!ResourceType::Post.requires_same_organization());
        assert!(!ResourceType::Member.requires_same_organization());
    }
}
