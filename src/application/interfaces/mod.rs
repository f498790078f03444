/// Comment service interface
pub mod comments;
/// Like service interface
pub mod likes;
/// Location service interface
pub mod locations;
/// Media service interface
pub mod media;
/// Relationship service interface
pub mod relationships;
/// Tag service interface
pub mod tags;
/// User service interface
pub mod users;

pub use comments::*;
pub use likes::*;
pub use locations::*;
pub use media::*;
pub use relationships::*;
pub use tags::*;
pub use users::*;
