/// Capability resolved through the locator.
///
/// `operation` takes `&self`: the locator only ever holds a shared borrow,
/// so variants with state keep it behind interior mutability.
pub trait Service {
    fn operation(&self);

    /// Short label for log output.
    fn name(&self) -> &'static str {
        "service"
    }
}

/// Inert fallback. Dispatching to it never has an observable effect.
///
/// Not constructible outside this crate: `NULL_SERVICE` is the only instance.
///
/// ```compile_fail
/// let _second = service_locator::NullService(());
/// ```
#[derive(Debug)]
pub struct NullService(());

impl Service for NullService {
    #[inline(always)]
    fn operation(&self) {}

    #[inline(always)]
    fn name(&self) -> &'static str {
        "null"
    }
}

/// The one null instance shared by every locator for the whole process.
pub static NULL_SERVICE: NullService = NullService(());

#[cfg(test)]
mod tests {
    use super::*;

    struct Unnamed;

    impl Service for Unnamed {
        fn operation(&self) {}
    }

    #[test]
    fn null_service_is_named_null() {
        assert_eq!(NULL_SERVICE.name(), "null");
        NULL_SERVICE.operation();
    }

    #[test]
    fn default_name_is_generic() {
        assert_eq!(Unnamed.name(), "service");
    }
}
