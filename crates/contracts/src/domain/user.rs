use serde::{Deserialize, Serialize};

/// A front-site member account (not a console administrator).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub username: String,
    pub nickname: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "avatarURL", default)]
    pub avatar_url: String,
    #[serde(default)]
    pub sex: String,
    #[serde(rename = "projectID")]
    pub project_id: String,
    #[serde(default)]
    pub status: u32,
    #[serde(default)]
    pub birthday: String,
    #[serde(default)]
    pub point: f64,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub nickname: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub nickname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserListRequest {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub nickname: String,
    pub username: String,
    #[serde(rename = "pageNum")]
    pub page_num: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserListData {
    pub users: Vec<UserDto>,
    pub total: i64,
}
