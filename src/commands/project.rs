//! Project Commands

use serde::Serialize;

use super::{invoke_list, invoke_unit, IdArgs};
use crate::models::{NewProject, Project};

#[derive(Serialize)]
pub struct UpdateProjectArgs<'a> {
    pub project: &'a Project,
}

pub async fn add_project(project: &NewProject) -> Result<(), String> {
    invoke_unit("add_project", project).await
}

pub async fn get_projects() -> Result<Vec<Project>, String> {
    invoke_list("get_projects").await
}

pub async fn update_project(project: &Project) -> Result<(), String> {
    invoke_unit("update_project", &UpdateProjectArgs { project }).await
}

pub async fn delete_project(id: u32) -> Result<(), String> {
    invoke_unit("delete_project", &IdArgs { id }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_args() {
        assert_eq!(
            serde_json::to_value(NewProject { project_number: 5 }).unwrap(),
            json!({ "projectNumber": 5 })
        );

        let project = Project { id: 2, project_number: 9 };
        assert_eq!(
            serde_json::to_value(UpdateProjectArgs { project: &project }).unwrap(),
            json!({ "project": { "id": 2, "project_number": 9 } })
        );
    }
}
