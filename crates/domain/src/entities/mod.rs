//! Domain entities - Core business objects with identity

mod album;
mod album_item;
mod bulletin;
mod chat_room;
mod contact_info;
mod event;
mod rating;
mod subscription;
mod user;

pub use album::Album;
pub use album_item::AlbumItem;
pub use bulletin::Bulletin;
pub use chat_room::ChatRoom;
pub use contact_info::ContactInfo;
pub use event::Event;
pub use rating::Rating;
pub use subscription::Subscription;
pub use user::{ParticipantProfile, User, UserRole};
