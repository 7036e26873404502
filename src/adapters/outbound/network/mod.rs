/// Network adapters for the dependency-resolution service
mod caching_resolver;
mod rest_resolver;

pub use caching_resolver::CachingDependencyResolver;
pub use rest_resolver::RestDependencyResolver;
