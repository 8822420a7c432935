//! Data models for the ScrapeBadger API.
//!
//! - [`primitives`] - Identifier newtypes (`TweetId`, `UserId`, ...)
//! - [`enums`] - Enumerations used as request parameters
//! - [`tweet`], [`user`], [`list`], [`community`], [`trend`], [`place`] - Entities

pub mod primitives;
pub mod enums;
pub mod tweet;
pub mod user;
pub mod list;
pub mod community;
pub mod trend;
pub mod place;

pub use primitives::*;
pub use enums::*;
pub use tweet::*;
pub use user::*;
pub use list::*;
pub use community::*;
pub use trend::*;
pub use place::*;
