pub mod impl_fake;
pub mod impl_firebase;
pub mod interface;
