//! Shortcode lifecycle: creation, collision handling and lazy expiry.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::LinkRecord;
use crate::domain::error::StoreError;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::memory::InMemoryLinkRepository;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator, validate_shortcode};
use crate::utils::ttl::expiry_for;
use crate::utils::url_validator::validate_target_url;

/// Upper bound on generated-code collisions tolerated by a single `create`.
pub const MAX_GENERATION_ATTEMPTS: usize = 100;

/// Builds the public short link for `code` under `base_url`.
pub fn short_link(base_url: &str, code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}

/// Store mapping shortcodes to link records.
///
/// The store is append-only: records are created, never updated or removed.
/// Expiry is checked when a code is resolved; expired records keep their code
/// reserved.
///
/// One instance is built at startup and shared through
/// [`crate::state::AppState`]. Tests build as many isolated instances as they
/// need.
pub struct ShortLinkStore<R: LinkRepository = InMemoryLinkRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    generator: Arc<dyn CodeGenerator>,
}

impl<R: LinkRepository> ShortLinkStore<R> {
    /// Creates a store over `repository` using the system clock and random
    /// code generation.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            clock: Arc::new(SystemClock),
            generator: Arc::new(RandomCodeGenerator),
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the shortcode generator.
    pub fn with_generator(mut self, generator: Arc<dyn CodeGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Creates a new short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - Absolute URL the code will redirect to
    /// - `ttl_minutes` - Validity in minutes; absent or non-positive means 30
    /// - `requested_code` - Optional caller-chosen code, used verbatim if free
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidUrl`] if `target_url` is not an absolute URL with a host
    /// - [`StoreError::InvalidShortcode`] if `requested_code` is not 4-16 alphanumerics
    /// - [`StoreError::ShortcodeConflict`] if `requested_code` is already held,
    ///   even by an expired record
    /// - [`StoreError::Internal`] if no free code was generated within
    ///   [`MAX_GENERATION_ATTEMPTS`]
    pub fn create(
        &self,
        target_url: &str,
        ttl_minutes: Option<i64>,
        requested_code: Option<&str>,
    ) -> Result<LinkRecord, StoreError> {
        validate_target_url(target_url).map_err(|e| StoreError::InvalidUrl {
            reason: e.to_string(),
        })?;

        if let Some(code) = requested_code {
            validate_shortcode(code)?;
        }

        let created_at = self.clock.now();
        let expires_at = expiry_for(created_at, ttl_minutes);

        let record = match requested_code {
            Some(code) => {
                let record = LinkRecord::new(
                    code.to_string(),
                    target_url.to_string(),
                    created_at,
                    expires_at,
                );
                self.repository.insert_if_absent(record.clone())?;
                record
            }
            None => self.insert_generated(target_url, created_at, expires_at)?,
        };

        info!(
            code = %record.code,
            expires_at = %record.expires_at,
            "Created short link"
        );

        Ok(record)
    }

    /// Resolves a code to its record.
    ///
    /// Serves both the redirect and the metadata lookups; the record is
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if no record holds `code`
    /// - [`StoreError::Expired`] if the record's expiry instant has passed
    pub fn resolve(&self, code: &str) -> Result<LinkRecord, StoreError> {
        let record = self
            .repository
            .find_by_code(code)
            .ok_or_else(|| StoreError::NotFound {
                code: code.to_string(),
            })?;

        if record.is_expired_at(self.clock.now()) {
            debug!(code, expires_at = %record.expires_at, "Resolved expired short link");
            return Err(StoreError::Expired {
                code: code.to_string(),
            });
        }

        Ok(record)
    }

    /// Number of records held, expired ones included.
    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Draws codes until one is inserted.
    ///
    /// Each attempt is an atomic insert-if-absent, so a code picked by a
    /// concurrent caller in between is reported as a conflict and redrawn.
    fn insert_generated(
        &self,
        target_url: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<LinkRecord, StoreError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let record = LinkRecord::new(
                self.generator.generate(),
                target_url.to_string(),
                created_at,
                expires_at,
            );

            match self.repository.insert_if_absent(record.clone()) {
                Ok(()) => return Ok(record),
                Err(StoreError::ShortcodeConflict { code }) => {
                    debug!(code = %code, attempt, "Generated shortcode collided, retrying");
                }
                Err(other) => return Err(other),
            }
        }

        error!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Failed to generate a free shortcode"
        );

        Err(StoreError::Internal {
            reason: format!("no free shortcode after {MAX_GENERATION_ATTEMPTS} attempts"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::{Duration, TimeZone};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Generator that replays a fixed sequence, then repeats the last code.
    struct ScriptedGenerator {
        codes: Vec<&'static str>,
        next: AtomicUsize,
    }

    impl ScriptedGenerator {
        fn new(codes: Vec<&'static str>) -> Self {
            Self {
                codes,
                next: AtomicUsize::new(0),
            }
        }
    }

    impl CodeGenerator for ScriptedGenerator {
        fn generate(&self) -> String {
            let i = self.next.fetch_add(1, Ordering::SeqCst);
            self.codes[i.min(self.codes.len() - 1)].to_string()
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn memory_store(clock: &ManualClock) -> ShortLinkStore {
        ShortLinkStore::new(Arc::new(InMemoryLinkRepository::new()))
            .with_clock(Arc::new(clock.clone()))
    }

    #[test]
    fn test_create_generates_alphanumeric_code() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);

        let record = store
            .create("https://example.com/page", None, None)
            .unwrap();

        assert_eq!(record.code.len(), 8);
        assert!(record.code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(record.target_url, "https://example.com/page");
        assert_eq!(record.created_at, start());
        assert_eq!(record.expires_at, start() + Duration::minutes(30));
    }

    #[test]
    fn test_create_uses_requested_code_verbatim() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);

        let record = store
            .create("https://example.com", Some(5), Some("MyCode42"))
            .unwrap();

        assert_eq!(record.code, "MyCode42");
        assert_eq!(record.expires_at, start() + Duration::minutes(5));
    }

    #[test]
    fn test_create_non_positive_ttl_uses_default() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);

        let zero = store.create("https://example.com", Some(0), None).unwrap();
        let negative = store.create("https://example.com", Some(-10), None).unwrap();

        assert_eq!(zero.expires_at - zero.created_at, Duration::minutes(30));
        assert_eq!(negative.expires_at - negative.created_at, Duration::minutes(30));
    }

    #[test]
    fn test_create_invalid_url() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);

        for url in ["not a url", "", "example.com"] {
            let err = store.create(url, None, None).unwrap_err();
            assert!(matches!(err, StoreError::InvalidUrl { .. }), "url: {url:?}");
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_invalid_url_checked_before_shortcode() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);

        let err = store.create("not a url", None, Some("ab")).unwrap_err();

        assert!(matches!(err, StoreError::InvalidUrl { .. }));
    }

    #[test]
    fn test_create_invalid_shortcode() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);

        for code in ["ab", "this-code!", "abcdefghijklmnopq"] {
            let err = store
                .create("https://example.com", None, Some(code))
                .unwrap_err();
            assert!(
                matches!(err, StoreError::InvalidShortcode { .. }),
                "code: {code:?}"
            );
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_conflict_on_requested_code() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);

        store
            .create("https://example.com", None, Some("abcd1234"))
            .unwrap();
        let err = store
            .create("https://other.example.com", None, Some("abcd1234"))
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::ShortcodeConflict {
                code: "abcd1234".to_string()
            }
        );
        assert_eq!(
            store.resolve("abcd1234").unwrap().target_url,
            "https://example.com"
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_conflict_on_expired_code() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);

        store
            .create("https://example.com", Some(1), Some("oldcode"))
            .unwrap();
        clock.advance(Duration::hours(1));

        let err = store
            .create("https://example.com", None, Some("oldcode"))
            .unwrap_err();

        assert!(matches!(err, StoreError::ShortcodeConflict { .. }));
    }

    #[test]
    fn test_create_retries_generated_collisions() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock).with_generator(Arc::new(ScriptedGenerator::new(vec![
            "taken111", "taken111", "fresh222",
        ])));

        let first = store.create("https://a.example.com", None, None).unwrap();
        let second = store.create("https://b.example.com", None, None).unwrap();

        assert_eq!(first.code, "taken111");
        assert_eq!(second.code, "fresh222");
    }

    #[test]
    fn test_create_generated_skips_requested_codes() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock)
            .with_generator(Arc::new(ScriptedGenerator::new(vec!["custom12", "random34"])));

        store
            .create("https://a.example.com", None, Some("custom12"))
            .unwrap();
        let generated = store.create("https://b.example.com", None, None).unwrap();

        assert_eq!(generated.code, "random34");
    }

    #[test]
    fn test_create_generation_exhausted_is_internal() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock)
            .with_generator(Arc::new(ScriptedGenerator::new(vec!["samecode"])));

        store.create("https://a.example.com", None, None).unwrap();
        let err = store.create("https://b.example.com", None, None).unwrap_err();

        assert!(matches!(err, StoreError::Internal { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_generation_attempts_are_bounded() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert_if_absent()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(|record| {
                Err(StoreError::ShortcodeConflict {
                    code: record.code,
                })
            });

        let store = ShortLinkStore::new(Arc::new(repo));
        let err = store.create("https://example.com", None, None).unwrap_err();

        assert!(matches!(err, StoreError::Internal { .. }));
    }

    #[test]
    fn test_create_invalid_input_never_touches_repository() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert_if_absent().times(0);

        let store = ShortLinkStore::new(Arc::new(repo));

        assert!(store.create("", None, None).is_err());
        assert!(store
            .create("https://example.com", None, Some("x!"))
            .is_err());
    }

    #[test]
    fn test_create_with_mock_repository_inserts_once() {
        let inserted = Arc::new(Mutex::new(Vec::new()));
        let sink = inserted.clone();

        let mut repo = MockLinkRepository::new();
        repo.expect_insert_if_absent()
            .withf(|record| record.code == "mycode12")
            .times(1)
            .returning(move |record| {
                sink.lock().unwrap().push(record);
                Ok(())
            });

        let store = ShortLinkStore::new(Arc::new(repo));
        let record = store
            .create("https://example.com", None, Some("mycode12"))
            .unwrap();

        let inserted = inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0], record);
    }

    #[test]
    fn test_resolve_not_found() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);

        let err = store.resolve("doesNotExist").unwrap_err();

        assert_eq!(
            err,
            StoreError::NotFound {
                code: "doesNotExist".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_expiry_boundary() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);
        let record = store
            .create("https://example.com", Some(1), None)
            .unwrap();

        clock.set(start() + Duration::seconds(30));
        assert_eq!(store.resolve(&record.code).unwrap(), record);

        clock.set(start() + Duration::seconds(60));
        assert_eq!(store.resolve(&record.code).unwrap(), record);

        clock.set(start() + Duration::seconds(61));
        assert!(matches!(
            store.resolve(&record.code),
            Err(StoreError::Expired { .. })
        ));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);
        let record = store.create("https://example.com", None, None).unwrap();

        let first = store.resolve(&record.code).unwrap();
        clock.advance(Duration::minutes(5));
        let second = store.resolve(&record.code).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, record);
    }

    #[test]
    fn test_resolve_expired_is_not_resurrected() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);
        let record = store.create("https://example.com", Some(1), None).unwrap();

        clock.advance(Duration::minutes(2));
        assert!(store.resolve(&record.code).is_err());
        assert!(store.resolve(&record.code).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_resolve_with_mock_repository() {
        let created = start();
        let record = LinkRecord::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            created,
            created + Duration::minutes(30),
        );
        let found = record.clone();

        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(move |_| Some(found.clone()));

        let clock = ManualClock::new(created);
        let store = ShortLinkStore::new(Arc::new(repo)).with_clock(Arc::new(clock));

        assert_eq!(store.resolve("abc123").unwrap(), record);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let clock = ManualClock::new(start());
        let store = memory_store(&clock);

        let record = store
            .create("https://example.com/page", None, None)
            .unwrap();
        assert_eq!(record.code.len(), 8);
        assert_eq!(record.expires_at, record.created_at + Duration::minutes(30));

        let resolved = store.resolve(&record.code).unwrap();
        assert_eq!(resolved.target_url, "https://example.com/page");

        clock.advance(Duration::minutes(30) + Duration::seconds(1));
        assert!(matches!(
            store.resolve(&record.code),
            Err(StoreError::Expired { .. })
        ));
    }

    #[test]
    fn test_short_link_trims_trailing_slash() {
        assert_eq!(
            short_link("http://localhost:3000/", "abcd1234"),
            "http://localhost:3000/abcd1234"
        );
        assert_eq!(
            short_link("https://s.example.com", "abcd1234"),
            "https://s.example.com/abcd1234"
        );
    }

    #[test]
    fn test_concurrent_requested_code_single_success() {
        let clock = ManualClock::new(start());
        let store = Arc::new(memory_store(&clock));

        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|i| {
                    let store = store.clone();
                    scope.spawn(move || {
                        store.create(&format!("https://{i}.example.com"), None, Some("racecode"))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let successes = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(StoreError::ShortcodeConflict { .. })))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(conflicts, 15);
        assert_eq!(store.len(), 1);
    }
}
