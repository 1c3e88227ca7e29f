//! Screen controllers.
//!
//! One controller per screen of the product: generation form, saved
//! names, domain check, logo generator. Controllers own their local
//! state, talk to the backend and the store through trait objects, and
//! surface failures as errors for the caller to present; none of them
//! ever takes the process down. Ad moments degrade silently.

pub mod domain_check;
pub mod home;
pub mod logo;
pub mod saved;
pub mod text;

pub use domain_check::DomainCheckScreen;
pub use home::HomeScreen;
pub use logo::LogoScreen;
pub use saved::SavedScreen;
pub use text::Translations;
