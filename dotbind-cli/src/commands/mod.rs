pub mod classify;
pub mod common;
pub mod compare;
pub mod policy;
pub mod port;
pub mod retarget;
