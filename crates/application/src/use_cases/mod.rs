mod resolve_query;

pub use resolve_query::{ResolveQueryUseCase, STATIC_OVERRIDE_TTL};
