pub mod args;
pub mod encoder;
pub mod engine;
pub mod metadata;
pub mod range;
pub mod pubsub {
    pub mod subscriber;
}
pub mod sink {
    pub mod csv;
    pub mod handle;
}
pub mod source {
    pub mod filter;
    pub mod handle;
    pub mod record;
    pub mod transaction;
    pub mod transfer;
}
