pub mod likes;
pub mod wall;
