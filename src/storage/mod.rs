pub mod mongo;
pub mod traits;

pub use mongo::MongoStorage;
pub use traits::PeopleStore;
