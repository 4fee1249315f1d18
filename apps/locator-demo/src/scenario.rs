use service_locator::{CountingService, ServiceLocator};

use crate::error::{DemoError, DemoResult};

/// Consumer that resolves its service through the locator it is handed,
/// never through a global.
pub struct Caller<'l, 'a> {
    locator: &'l ServiceLocator<'a>,
}

impl<'l, 'a> Caller<'l, 'a> {
    #[inline]
    pub fn new(locator: &'l ServiceLocator<'a>) -> Self {
        Self { locator }
    }

    pub fn dispatch(&self, times: u32) {
        let service = self.locator.service();
        log::trace!("dispatching {times}x to `{}`", service.name());
        for _ in 0..times {
            service.operation();
        }
    }
}

fn expect(name: &'static str, svc: &CountingService, expected: u32) -> DemoResult<()> {
    let actual = svc.value();
    if actual != expected {
        return Err(DemoError::Scenario { name, expected, actual });
    }
    log::info!("{name}: counter = {actual}");
    Ok(())
}

/// Replays the registration scenarios against one counting service and a
/// fresh locator, then the replacement scenario against two more.
pub fn run_all(operations: u32) -> DemoResult<()> {
    let svc = CountingService::new();
    let mut locator = ServiceLocator::new();

    Caller::new(&locator).dispatch(operations);
    expect("unregistered", &svc, 0)?;

    locator.set_service(Some(&svc));
    Caller::new(&locator).dispatch(operations);
    expect("registered", &svc, operations)?;

    locator.set_service(None);
    Caller::new(&locator).dispatch(operations);
    expect("unregistered-again", &svc, operations)?;

    let a = CountingService::new();
    let b = CountingService::new();
    locator.set_service(Some(&a));
    locator.set_service(Some(&b));
    Caller::new(&locator).dispatch(operations);
    expect("replaced-first", &a, 0)?;
    expect("replaced-second", &b, operations)?;

    log::debug!("final locator: {locator:?}");
    Ok(())
}
