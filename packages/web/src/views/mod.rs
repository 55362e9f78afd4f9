//! Route targets. Each wraps a `ui` screen and turns its callbacks into
//! navigation.

mod landing;
pub use landing::Landing;

mod auth;
pub use auth::Auth;

mod otp_verify;
pub use otp_verify::OtpVerify;

mod dashboard;
pub use dashboard::Dashboard;

mod not_found;
pub use not_found::NotFound;
