pub mod activity;

pub use activity::{Activity, ActivityName, StudentEmail};
