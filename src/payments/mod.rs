pub mod gateway;
pub mod reconcile;
