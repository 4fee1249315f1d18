mod counting;
mod locator;
mod service;

pub use counting::CountingService;
pub use locator::{LocatorState, ServiceLocator};
pub use service::{NullService, Service, NULL_SERVICE};
