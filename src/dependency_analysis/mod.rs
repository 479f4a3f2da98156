/// Analysis core: graph utilities, domain values and analysis services
///
/// Nothing in here performs I/O; the container is reached only through the
/// [`BeanContainer`](crate::ports::outbound::BeanContainer) port.
pub mod domain;
pub mod graph;
pub mod services;
