use contracts::domain::project::{
    CreateProjectRequest, DeleteProjectsRequest, ProjectListData, ProjectListRequest,
};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/project";

fn project_path(project_id: &str) -> String {
    format!("{}/{}", BASE, project_id)
}

/// Query the project list.
pub async fn get_project_list(
    client: &AdminClient,
    params: &ProjectListRequest,
) -> Result<ProjectListData, ApiError> {
    client.get(BASE, params).await
}

/// Create a project.
pub async fn create_project(
    client: &AdminClient,
    req: &CreateProjectRequest,
) -> Result<(), ApiError> {
    client.post(BASE, req).await
}

/// Update a project.
pub async fn update_project(
    client: &AdminClient,
    project_id: &str,
    req: &CreateProjectRequest,
) -> Result<(), ApiError> {
    client.patch(&project_path(project_id), req).await
}

/// Batch-delete projects.
pub async fn batch_delete_project(
    client: &AdminClient,
    req: &DeleteProjectsRequest,
) -> Result<(), ApiError> {
    client.delete(BASE, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(BASE, "/api/project");
        assert_eq!(project_path("p7"), "/api/project/p7");
    }
}
