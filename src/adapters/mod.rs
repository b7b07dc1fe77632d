// Adapters layer: concrete implementations of the domain ports (http, storage, pacing).

pub mod http;
pub mod pacer;
pub mod storage;

pub use http::HttpAliasClient;
pub use pacer::TokioPacer;
pub use storage::LocalStorage;
