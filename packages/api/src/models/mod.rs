pub mod note;
pub mod payloads;
pub mod user;

pub use note::Note;
pub use user::UserInfo;
