//! Small presentational building blocks shared by every screen.

mod button;
pub use button::{Button, ButtonVariant};

mod card;
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};

mod feedback;
pub use feedback::{Skeleton, Spinner};

mod form;
pub use form::{FieldError, Input, Label, Textarea};

pub mod toast;
pub use toast::{use_toast, ToastKind, ToastOptions, ToastProvider, Toasts};
