/// Inventory engine: domain model, services and classification policies
pub mod domain;
pub mod policies;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
