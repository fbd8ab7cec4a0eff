//! Move provider registry.
//!
//! Local providers are registered in a static factory list keyed by stable
//! name; keep ordering stable and constructors side-effect free. The Gemini
//! provider is constructed separately because it needs runtime configuration.

use std::sync::Arc;

use super::random::RandomProvider;
use super::strategic::StrategicProvider;
use super::trait_def::MoveProvider;

pub struct ProviderFactory {
    pub name: &'static str,
    pub make: fn(seed: Option<u64>) -> Arc<dyn MoveProvider>,
}

static PROVIDER_FACTORIES: &[ProviderFactory] = &[
    ProviderFactory {
        name: RandomProvider::NAME,
        make: make_random,
    },
    ProviderFactory {
        name: StrategicProvider::NAME,
        make: make_strategic,
    },
];

pub fn registered_providers() -> &'static [ProviderFactory] {
    PROVIDER_FACTORIES
}

pub fn by_name(name: &str) -> Option<&'static ProviderFactory> {
    registered_providers().iter().find(|f| f.name == name)
}

fn make_random(seed: Option<u64>) -> Arc<dyn MoveProvider> {
    Arc::new(RandomProvider::new(seed))
}

fn make_strategic(seed: Option<u64>) -> Arc<dyn MoveProvider> {
    Arc::new(StrategicProvider::new(seed))
}

#[cfg(test)]
mod registry_smoke {
    use super::*;

    #[test]
    fn enumerates_local_providers() {
        let names: Vec<_> = registered_providers().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["random", "strategic"]);
    }

    #[test]
    fn lookup_by_name() {
        assert!(by_name("strategic").is_some());
        assert!(by_name("gemini").is_none());
        assert!(by_name("").is_none());
    }

    #[tokio::test]
    async fn factories_build_working_providers() {
        use crate::ai::trait_def::OpponentView;
        for factory in registered_providers() {
            let provider = (factory.make)(Some(1));
            assert_eq!(provider.name(), factory.name);
            assert!(provider.choose(&OpponentView::default()).await.is_ok());
        }
    }
}
