/// Domain layer: release model, filtering policies and pure pipeline services
pub mod domain;
pub mod policies;
pub mod services;
