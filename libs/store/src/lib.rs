pub mod utils;
pub mod writer;
pub mod token {
    pub mod model;
    pub mod pretty;
    pub mod store;
}
pub mod transaction {
    pub mod model;
}
pub mod transfer {
    pub mod model;
}
