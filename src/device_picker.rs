pub mod impl_fake;
pub mod impl_local;
pub mod interface;
