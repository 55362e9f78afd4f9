mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod notes_placeholder;
pub use notes_placeholder::NotesPlaceholder;

mod landing;
pub use landing::LandingView;

mod auth;
pub use auth::{AuthTab, AuthView};

mod otp_verify;
pub use otp_verify::OtpVerifyView;

mod note_card;
pub use note_card::{ConfirmDeleteDialog, NoteCard};

mod dashboard;
pub use dashboard::DashboardView;

use dioxus::prelude::*;

/// Claim an in-flight flag before spawning a request. Returns `false` when a
/// request already holds it, so a double submit in one frame sends once.
pub(crate) fn begin_request(mut in_flight: Signal<bool>) -> bool {
    if *in_flight.peek() {
        return false;
    }
    in_flight.set(true);
    true
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    fn double_submit(claims: Rc<RefCell<Vec<bool>>>) -> Element {
        let in_flight = use_signal(|| false);
        use_hook(|| {
            let mut claims = claims.borrow_mut();
            claims.push(begin_request(in_flight));
            claims.push(begin_request(in_flight));
        });
        rsx! {}
    }

    #[test]
    fn test_second_submit_in_same_frame_is_dropped() {
        let claims = Rc::new(RefCell::new(Vec::new()));
        let mut dom = VirtualDom::new_with_props(double_submit, claims.clone());
        dom.rebuild_in_place();
        assert_eq!(*claims.borrow(), vec![true, false]);
    }
}
