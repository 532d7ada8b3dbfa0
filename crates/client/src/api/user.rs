use contracts::domain::user::{
    CreateUserRequest, UpdateUserRequest, UserListData, UserListRequest,
};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/user";

fn user_path(user_id: &str) -> String {
    format!("{}/{}", BASE, user_id)
}

/// Query the member list.
pub async fn get_user_list(
    client: &AdminClient,
    params: &UserListRequest,
) -> Result<UserListData, ApiError> {
    client.get(BASE, params).await
}

/// Create a member account.
pub async fn create_user(client: &AdminClient, req: &CreateUserRequest) -> Result<(), ApiError> {
    client.post(BASE, req).await
}

/// Update a member account.
pub async fn update_user(
    client: &AdminClient,
    user_id: &str,
    req: &UpdateUserRequest,
) -> Result<(), ApiError> {
    client.patch(&user_path(user_id), req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(user_path("u1"), "/api/user/u1");
    }
}
