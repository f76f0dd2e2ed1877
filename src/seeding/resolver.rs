//! Provider chain resolution and seeding diagnostics.

use super::provider::{OsEntropy, SeedProvider, TimeHash};
use super::SeedMaterial;
use std::sync::{Arc, Mutex};

/// Diagnostic events emitted while resolving a seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedEvent {
    /// A provider in the chain could not produce material.
    ProviderUnavailable {
        /// Provider name.
        provider: &'static str,
        /// Failure description.
        reason: String,
    },
    /// The seed came from somewhere weaker than the primary provider.
    WeakSeed {
        /// Provider that actually produced the seed.
        provider: &'static str,
    },
}

/// Receives seeding diagnostics.
///
/// Injectable so embedders can route events wherever they need; the
/// default [`LogSink`] renders them as `tracing` warnings.
pub trait DiagnosticsSink {
    /// Handles one event.
    fn emit(&self, event: &SeedEvent);
}

/// Default sink: renders events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn emit(&self, event: &SeedEvent) {
        match event {
            SeedEvent::ProviderUnavailable { provider, reason } => {
                tracing::warn!(provider, %reason, "seed provider unavailable");
            }
            SeedEvent::WeakSeed { provider } => {
                tracing::warn!(
                    provider,
                    "seeding from a fallback source; output is weaker than OS entropy"
                );
            }
        }
    }
}

/// Records events in memory.
///
/// Clone one handle into the resolver and keep the other to inspect
/// what was emitted; both handles see the same event list.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<SeedEvent>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events emitted so far.
    pub fn events(&self) -> Vec<SeedEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticsSink for MemorySink {
    fn emit(&self, event: &SeedEvent) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event.clone());
    }
}

/// Resolves seed material through an ordered provider chain.
///
/// Fallible providers are tried in order; the terminal time-hash
/// provider cannot fail, so resolution always produces material. Any
/// outcome other than first-provider success is reported through the
/// sink.
pub struct SeedResolver {
    providers: Vec<Box<dyn SeedProvider>>,
    last_resort: TimeHash,
    sink: Box<dyn DiagnosticsSink>,
}

impl SeedResolver {
    /// Creates a resolver with an explicit chain and sink.
    ///
    /// The time-hash last resort is always appended implicitly; the
    /// chain passed here holds the preferred providers.
    pub fn new(providers: Vec<Box<dyn SeedProvider>>, sink: Box<dyn DiagnosticsSink>) -> Self {
        Self {
            providers,
            last_resort: TimeHash,
            sink,
        }
    }

    /// OS entropy first, time hash last, warnings through `tracing`.
    pub fn with_defaults() -> Self {
        Self::new(vec![Box::new(OsEntropy::default())], Box::new(LogSink))
    }

    /// Replaces the diagnostics sink.
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Produces seed material, degrading through the chain as needed.
    ///
    /// Never fails. A seed from any provider past the first (including
    /// the terminal time hash) emits [`SeedEvent::WeakSeed`].
    pub fn resolve(&self) -> SeedMaterial {
        for (index, provider) in self.providers.iter().enumerate() {
            match provider.try_seed() {
                Ok(material) => {
                    if index > 0 {
                        self.sink.emit(&SeedEvent::WeakSeed {
                            provider: provider.name(),
                        });
                    }
                    return material;
                }
                Err(unavailable) => {
                    self.sink.emit(&SeedEvent::ProviderUnavailable {
                        provider: unavailable.provider,
                        reason: unavailable.reason,
                    });
                }
            }
        }

        self.sink.emit(&SeedEvent::WeakSeed {
            provider: self.last_resort.name(),
        });
        self.last_resort.seed()
    }
}

impl Default for SeedResolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for SeedResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("SeedResolver")
            .field("providers", &names)
            .field("last_resort", &self.last_resort.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeding::SeedUnavailable;

    struct AlwaysFails;

    impl SeedProvider for AlwaysFails {
        fn name(&self) -> &'static str {
            "always-fails"
        }

        fn try_seed(&self) -> Result<SeedMaterial, SeedUnavailable> {
            Err(SeedUnavailable {
                provider: self.name(),
                reason: "simulated outage".into(),
            })
        }
    }

    struct FixedSeed(&'static [u8]);

    impl SeedProvider for FixedSeed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn try_seed(&self) -> Result<SeedMaterial, SeedUnavailable> {
            Ok(SeedMaterial::new(self.0.to_vec()))
        }
    }

    #[test]
    fn test_primary_success_is_silent() {
        let sink = MemorySink::new();
        let resolver =
            SeedResolver::new(vec![Box::new(FixedSeed(b"abcd"))], Box::new(sink.clone()));

        let material = resolver.resolve();

        assert_eq!(material.as_bytes(), b"abcd");
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_failure_falls_through_to_next_provider() {
        let sink = MemorySink::new();
        let resolver = SeedResolver::new(
            vec![Box::new(AlwaysFails), Box::new(FixedSeed(b"backup"))],
            Box::new(sink.clone()),
        );

        let material = resolver.resolve();

        assert_eq!(material.as_bytes(), b"backup");
        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            SeedEvent::ProviderUnavailable {
                provider: "always-fails",
                ..
            }
        ));
        assert_eq!(events[1], SeedEvent::WeakSeed { provider: "fixed" });
    }

    #[test]
    fn test_exhausted_chain_uses_time_hash() {
        let sink = MemorySink::new();
        let resolver = SeedResolver::new(vec![Box::new(AlwaysFails)], Box::new(sink.clone()));

        let material = resolver.resolve();

        assert_eq!(material.len(), 64);
        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            SeedEvent::WeakSeed {
                provider: "time-hash"
            }
        );
    }

    #[test]
    fn test_empty_chain_still_resolves() {
        let sink = MemorySink::new();
        let resolver = SeedResolver::new(vec![], Box::new(sink.clone()));

        let material = resolver.resolve();

        assert_eq!(material.len(), 64);
        assert_eq!(
            sink.events(),
            vec![SeedEvent::WeakSeed {
                provider: "time-hash"
            }]
        );
    }

    #[test]
    fn test_default_chain_resolves() {
        // OS entropy is available in the test environment; the default
        // chain should produce the full request silently.
        let sink = MemorySink::new();
        let resolver = SeedResolver::with_defaults().with_sink(Box::new(sink.clone()));

        let material = resolver.resolve();

        assert_eq!(material.len(), crate::seeding::OS_REQUEST_BYTES);
        assert!(sink.events().is_empty());
    }
}
