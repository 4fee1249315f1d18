use std::fmt;

use crate::service::{Service, NULL_SERVICE};

/// Which target the single slot currently resolves to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LocatorState {
    /// Resolves to the null service.
    Unregistered,
    /// Resolves to a caller-supplied service.
    Registered,
}

#[derive(Copy, Clone)]
enum Slot<'a> {
    Null,
    Service(&'a dyn Service),
}

/// Single-slot registry handing out the current `Service`.
///
/// Build one at startup and pass it by reference to whoever needs service
/// resolution. The locator never owns what it hands out: registered services
/// are borrowed for `'a`, and the fallback is the process-wide `NULL_SERVICE`.
pub struct ServiceLocator<'a> {
    slot: Slot<'a>,
}

impl<'a> ServiceLocator<'a> {
    #[inline]
    pub fn new() -> Self {
        Self { slot: Slot::Null }
    }

    /// Register `service` as the current target. `None` falls back to the
    /// null service. The previous registration is dropped from the slot and
    /// not remembered.
    pub fn set_service(&mut self, service: Option<&'a dyn Service>) {
        match (self.slot, service) {
            (Slot::Null, None) => {}
            (Slot::Service(prev), None) => {
                log::debug!("service locator: `{}` unregistered, using null service", prev.name());
            }
            (Slot::Null, Some(next)) => {
                log::debug!("service locator: `{}` registered", next.name());
            }
            (Slot::Service(prev), Some(next)) => {
                log::trace!(
                    "service locator: `{}` replaced by `{}`",
                    prev.name(),
                    next.name()
                );
            }
        }

        self.slot = match service {
            Some(s) => Slot::Service(s),
            None => Slot::Null,
        };
    }

    #[inline]
    pub fn reset(&mut self) {
        self.set_service(None);
    }

    /// Current target. Never absent.
    #[inline]
    pub fn service(&self) -> &'a dyn Service {
        match self.slot {
            Slot::Null => &NULL_SERVICE,
            Slot::Service(s) => s,
        }
    }

    #[inline]
    pub fn state(&self) -> LocatorState {
        match self.slot {
            Slot::Null => LocatorState::Unregistered,
            Slot::Service(_) => LocatorState::Registered,
        }
    }

    #[inline]
    pub fn is_registered(&self) -> bool {
        self.state() == LocatorState::Registered
    }
}

impl Default for ServiceLocator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceLocator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceLocator")
            .field("state", &self.state())
            .field("service", &self.service().name())
            .finish()
    }
}
