use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role of a login account within its clinic.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRoleDto {
    Admin,
    Professional,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRoleDto,
    pub clinic_id: i32,
}

/// Response of `GET /api/users/me`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CurrentUserDto {
    pub user: UserDto,
}
