use std::cell::Cell;

use crate::service::Service;

/// Example variant: counts how many times it was dispatched to.
///
/// Owned by whoever constructs it; a locator only borrows it.
#[derive(Debug, Default)]
pub struct CountingService {
    value: Cell<u32>,
}

impl CountingService {
    #[inline]
    pub fn new() -> Self {
        Self { value: Cell::new(0) }
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value.get()
    }
}

impl Service for CountingService {
    #[inline]
    fn operation(&self) {
        self.value.set(self.value.get().wrapping_add(1));
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(CountingService::new().value(), 0);
        assert_eq!(CountingService::default().value(), 0);
    }

    #[test]
    fn operation_increments() {
        let svc = CountingService::new();
        svc.operation();
        svc.operation();
        assert_eq!(svc.value(), 2);
    }

    #[test]
    fn operation_wraps_instead_of_panicking() {
        let svc = CountingService { value: Cell::new(u32::MAX) };
        svc.operation();
        assert_eq!(svc.value(), 0);
    }
}
