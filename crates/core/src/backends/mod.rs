mod fixtures;
pub mod mock;
pub mod remote;

pub use mock::{route_query, FixtureSet, MockSearchBackend};
pub use remote::RemoteSearchClient;
