use std::cell::RefCell;

use super::*;
use crate::{
    entities::{AddressRecord, MapPoint, RegisteredUser},
    gateways::locate::DeviceLocator,
    repositories::{self, UserRecordRepo},
    resolve::{
        CancelToken, ResolutionChain, ResolutionOutcome, ResolutionStrategy, StrategyResult,
        StrategySource,
    },
};

#[derive(Default)]
struct InMemoryRepo(RefCell<Option<RegisteredUser>>);

impl UserRecordRepo for InMemoryRepo {
    fn get(&self) -> std::result::Result<Option<RegisteredUser>, repositories::Error> {
        Ok(self.0.borrow().clone())
    }
    fn set(&self, user: &RegisteredUser) -> std::result::Result<(), repositories::Error> {
        *self.0.borrow_mut() = Some(user.clone());
        Ok(())
    }
    fn clear(&self) -> std::result::Result<(), repositories::Error> {
        *self.0.borrow_mut() = None;
        Ok(())
    }
}

fn sample_registration() -> Registration {
    Registration {
        name: "Maria".into(),
        password: "secret".into(),
        postal_code: "01310100".into(),
        street: "Avenida Paulista".into(),
        neighborhood: "Bela Vista".into(),
        number: "1000".into(),
        city: "São Paulo".into(),
        state: Some("SP".into()),
    }
}

#[test]
fn register_normalizes_and_stores_the_record() {
    let repo = InMemoryRepo::default();
    let user = register(&repo, sample_registration()).unwrap();
    assert_eq!("01310-100", user.address.postal_code);
    assert_eq!(Some(user), repo.get().unwrap());
}

#[test]
fn register_rejects_blank_required_fields() {
    let repo = InMemoryRepo::default();
    let registration = Registration {
        city: "  ".into(),
        ..sample_registration()
    };
    assert!(matches!(
        register(&repo, registration),
        Err(Error::MissingField("city"))
    ));
    assert!(repo.get().unwrap().is_none());
}

#[test]
fn register_rejects_malformed_postal_code() {
    let repo = InMemoryRepo::default();
    let registration = Registration {
        postal_code: "1310-100".into(),
        ..sample_registration()
    };
    assert!(matches!(
        register(&repo, registration),
        Err(Error::PostalCode)
    ));
}

#[test]
fn register_overwrites_wholesale() {
    let repo = InMemoryRepo::default();
    register(&repo, sample_registration()).unwrap();
    let replacement = Registration {
        name: "João".into(),
        state: None,
        ..sample_registration()
    };
    let user = register(&repo, replacement).unwrap();
    let stored = repo.get().unwrap().unwrap();
    assert_eq!(user, stored);
    assert_eq!("João", stored.address.name);
    // No merge with the previous registration.
    assert_eq!(None, stored.address.state);
}

#[test]
fn login_succeeds_with_matching_credentials() {
    let repo = InMemoryRepo::default();
    register(&repo, sample_registration()).unwrap();
    let user = login(
        &repo,
        &Credentials {
            name: "Maria",
            password: "secret",
        },
    )
    .unwrap();
    assert_eq!("Maria", user.address.name);
}

#[test]
fn login_rejects_wrong_password() {
    let repo = InMemoryRepo::default();
    register(&repo, sample_registration()).unwrap();
    assert!(matches!(
        login(
            &repo,
            &Credentials {
                name: "Maria",
                password: "wrong",
            },
        ),
        Err(Error::Credentials)
    ));
}

#[test]
fn login_without_registration_is_distinct_from_bad_credentials() {
    let repo = InMemoryRepo::default();
    assert!(matches!(
        login(
            &repo,
            &Credentials {
                name: "Maria",
                password: "secret",
            },
        ),
        Err(Error::NoUserRegistered)
    ));
}

struct FixedPoint(MapPoint);

impl ResolutionStrategy for FixedPoint {
    fn source(&self) -> StrategySource {
        StrategySource::FreeTextGeocoder
    }
    fn attempt(&self, _: &AddressRecord, _: Option<MapPoint>) -> StrategyResult {
        StrategyResult::Matched(self.0)
    }
}

struct NoFix;

impl DeviceLocator for NoFix {
    fn current_position(&self) -> Option<MapPoint> {
        None
    }
}

#[test]
fn locate_resolves_the_stored_address() {
    let repo = InMemoryRepo::default();
    register(&repo, sample_registration()).unwrap();
    let chain =
        ResolutionChain::with_strategies(vec![Box::new(FixedPoint(MapPoint::new(-23.561, -46.655)))]);
    let located = locate_registered_user(&repo, &chain, &NoFix, &CancelToken::new())
        .unwrap()
        .unwrap();
    assert_eq!("Maria", located.address.name);
    assert_eq!(
        ResolutionOutcome::Resolved {
            pos: MapPoint::new(-23.561, -46.655),
            source: StrategySource::FreeTextGeocoder,
        },
        located.outcome
    );
}

#[test]
fn locate_without_registration_fails_fast() {
    let repo = InMemoryRepo::default();
    let chain = ResolutionChain::with_strategies(Vec::new());
    assert!(matches!(
        locate_registered_user(&repo, &chain, &NoFix, &CancelToken::new()),
        Err(Error::NoUserRegistered)
    ));
}

#[test]
fn locate_discards_a_cancelled_resolution() {
    let repo = InMemoryRepo::default();
    register(&repo, sample_registration()).unwrap();
    let chain =
        ResolutionChain::with_strategies(vec![Box::new(FixedPoint(MapPoint::new(-23.561, -46.655)))]);
    let cancel = CancelToken::new();
    cancel.cancel();
    assert!(locate_registered_user(&repo, &chain, &NoFix, &cancel)
        .unwrap()
        .is_none());
}
