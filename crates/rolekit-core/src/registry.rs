use crate::{
    error::CompositionError,
    host::Host,
    validate::{Certificate, CertificationReport, CompositionValidator},
};
use std::{
    any::TypeId,
    collections::BTreeMap,
    sync::{Mutex, OnceLock, PoisonError},
};

//
// HOSTS
// Process-wide certification cache, keyed by host type identity. Guarded by
// a mutex only because the test harness runs threads; certification itself
// is single-shot and order-free.
//

static HOSTS: OnceLock<Mutex<BTreeMap<TypeId, RegisteredHost>>> = OnceLock::new();

fn hosts() -> &'static Mutex<BTreeMap<TypeId, RegisteredHost>> {
    HOSTS.get_or_init(|| Mutex::new(BTreeMap::new()))
}

///
/// RegisteredHost
///

#[derive(Clone, Debug)]
struct RegisteredHost {
    name: &'static str,
    verdict: Result<Certificate, CompositionError>,
}

///
/// HostRegistry
///
/// The registration-time validation cache: every host type is certified
/// exactly once, the verdict is memoized, and repeated instantiation never
/// re-validates. A failed host stays failed for every later construction
/// attempt.
///

pub struct HostRegistry;

impl HostRegistry {
    /// Certify a host type, running the validator at most once.
    pub fn certify<H: Host>() -> Result<Certificate, CompositionError> {
        let mut map = hosts().lock().unwrap_or_else(PoisonError::into_inner);

        let entry = map.entry(TypeId::of::<H>()).or_insert_with(|| {
            let spec = H::spec();
            let verdict = CompositionValidator::certify(&spec);
            if let Err(err) = &verdict {
                tracing::error!(
                    target: "rolekit::registry",
                    host = spec.name(),
                    %err,
                    "host certification failed"
                );
            }

            RegisteredHost {
                name: spec.name(),
                verdict,
            }
        });

        entry.verdict.clone()
    }

    /// Cached verdict, if this host type has been seen.
    #[must_use]
    pub fn verdict<H: Host>() -> Option<Result<Certificate, CompositionError>> {
        hosts()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<H>())
            .map(|host| host.verdict.clone())
    }

    /// Reports for every host seen so far, sorted by host name.
    #[must_use]
    pub fn export() -> Vec<CertificationReport> {
        let map = hosts().lock().unwrap_or_else(PoisonError::into_inner);

        let mut reports: Vec<_> = map
            .values()
            .map(|host| CertificationReport::from_verdict(host.name, &host.verdict))
            .collect();
        reports.sort_by(|a, b| a.host.cmp(&b.host));

        reports
    }
}

///
/// TESTS
///
