pub mod image;
pub mod image_upload_response;
pub mod profile;
pub mod profile_dto;
pub mod profile_response;
pub mod profile_with_user_response;
