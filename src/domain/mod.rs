pub mod book;
pub mod user;
pub mod value_objects;

pub use book::*;
pub use user::*;
pub use value_objects::*;
