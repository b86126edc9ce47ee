pub use advisor::*;
pub use snapshot::*;

mod advisor;
mod snapshot;
