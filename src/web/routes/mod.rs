pub mod activities;
pub mod home;
