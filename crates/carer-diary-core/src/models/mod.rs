//! Domain models for the carer diary.

mod contact;
mod diary;
mod medication;
mod reminder;
mod user;

pub use contact::*;
pub use diary::*;
pub use medication::*;
pub use reminder::*;
pub use user::*;
