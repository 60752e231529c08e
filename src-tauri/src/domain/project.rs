//! Project Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A project, identified to users by its project number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub project_number: u32,
}

impl Project {
    pub fn new(project_number: u32) -> Self {
        Self { id: 0, project_number }
    }
}

impl Entity for Project {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Association between one project and one product order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOrderProjectLink {
    pub id: u32,
    pub project: u32,
    pub product_order: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = Project::new(5);
        assert_eq!(project.id(), 0);
        assert_eq!(project.project_number, 5);
    }
}
