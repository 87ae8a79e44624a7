pub mod likes_service;
pub mod wall_service;
