use contracts::domain::point::{CreatePointLogRequest, PointListData, PointLogListRequest};

use crate::client::AdminClient;
use crate::error::ApiError;

const BASE: &str = "/api/point";

/// Query the point-movement list.
pub async fn get_point_list(
    client: &AdminClient,
    params: &PointLogListRequest,
) -> Result<PointListData, ApiError> {
    client.get(BASE, params).await
}

/// Grant or deduct points for a member.
pub async fn create_point(
    client: &AdminClient,
    req: &CreatePointLogRequest,
) -> Result<(), ApiError> {
    client.post(BASE, req).await
}
