pub mod inspector;
pub mod not_found;
