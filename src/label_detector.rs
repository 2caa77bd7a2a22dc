pub mod impl_fake;
pub mod impl_google_vision;
pub mod interface;
