//! Well-known claim type names issued by the identity layer.

// Permission categories
pub const SENIOR_ADMIN: &str = "SeniorAdmin";
pub const HEAD_ADMIN: &str = "HeadAdmin";
pub const GAME_ADMIN: &str = "GameAdmin";
pub const MODERATOR: &str = "Moderator";
pub const SERVER_ADMIN: &str = "ServerAdmin";
pub const BAN_FILE_MONITOR: &str = "BanFileMonitor";

// Profile
pub const XTREMEIDIOTS_ID: &str = "XtremeIdiotsId";
pub const USER_PROFILE_ID: &str = "UserProfileId";
pub const PHOTO_URL: &str = "PhotoUrl";
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
