pub mod contact;
pub mod landing;
pub mod portfolio;
pub mod services;
