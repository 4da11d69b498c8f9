pub mod analyze;
pub mod batch;
pub mod dataset;
pub mod dispatch;
pub mod shared;
pub mod status;
pub mod train;
pub mod verify;
