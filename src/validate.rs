use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use url::{Host, Url};

/// Name-resolution seam for reachability checks.
///
/// `true` means the host currently resolves to at least one address.
/// Every failure mode (NXDOMAIN, resolver outage, network error) is
/// reported uniformly as `false`; callers never learn which one occurred.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolves(&self, host: &str) -> bool;
}

/// Resolver backed by the operating system's name lookup.
#[derive(Debug, Default)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolves(&self, host: &str) -> bool {
        match tokio::net::lookup_host((host, 80)).await {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(_) => false,
        }
    }
}

/// Decides whether a candidate string may be admitted as a shortenable URL.
///
/// The verdict combines a syntax check (absolute http/https URL) with a
/// reachability check (the hostname resolves right now). Reachability is
/// checked once, at admission; stored URLs are never re-verified.
#[derive(Clone)]
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
    dns_timeout: Duration,
}

impl UrlValidator {
    pub fn new(resolver: Arc<dyn HostResolver>, dns_timeout: Duration) -> Self {
        Self {
            resolver,
            dns_timeout,
        }
    }

    /// Check that `candidate` parses as an absolute URL with an http or
    /// https scheme. No side effects, no network.
    ///
    /// The URL parser lowercases schemes, so `HTTP://` and `http://` are
    /// treated alike.
    pub fn check_syntax(candidate: &str) -> bool {
        match Url::parse(candidate) {
            Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
            Err(_) => false,
        }
    }

    /// Check that the candidate's hostname currently resolves.
    ///
    /// Input that fails the syntax check fails here too, without a
    /// lookup. Literal IP hosts count as resolvable. The lookup is
    /// bounded by the configured timeout; an expired bound reads the same
    /// as a resolution failure.
    pub async fn check_reachable(&self, candidate: &str) -> bool {
        let Ok(parsed) = Url::parse(candidate) else {
            return false;
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }

        match parsed.host() {
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
            Some(Host::Domain(domain)) => {
                tokio::time::timeout(self.dns_timeout, self.resolver.resolves(domain))
                    .await
                    .unwrap_or(false)
            }
            None => false,
        }
    }

    /// Full admission verdict: syntax first, then reachability.
    ///
    /// The resolver is never consulted for input that fails the syntax
    /// check.
    pub async fn validate(&self, candidate: &str) -> AppResult<()> {
        if !Self::check_syntax(candidate) {
            return Err(AppError::SyntaxInvalid(candidate.to_owned()));
        }

        if !self.check_reachable(candidate).await {
            return Err(AppError::Unreachable(candidate.to_owned()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator(resolver: MockHostResolver) -> UrlValidator {
        UrlValidator::new(Arc::new(resolver), Duration::from_millis(200))
    }

    #[test]
    fn syntax_accepts_http_and_https() {
        assert!(UrlValidator::check_syntax("https://example.com"));
        assert!(UrlValidator::check_syntax("http://example.com"));
        assert!(UrlValidator::check_syntax(
            "https://example.com/some/path?q=1&r=2"
        ));
        assert!(UrlValidator::check_syntax("http://localhost:3000"));
    }

    #[test]
    fn syntax_is_case_insensitive_on_scheme() {
        assert!(UrlValidator::check_syntax("HTTPS://EXAMPLE.COM"));
        assert!(UrlValidator::check_syntax("HtTp://example.com"));
    }

    #[test]
    fn syntax_rejects_other_schemes() {
        assert!(!UrlValidator::check_syntax("ftp://example.com"));
        assert!(!UrlValidator::check_syntax("javascript:alert(1)"));
        assert!(!UrlValidator::check_syntax("mailto:user@example.com"));
    }

    #[test]
    fn syntax_rejects_malformed_input() {
        assert!(!UrlValidator::check_syntax(""));
        assert!(!UrlValidator::check_syntax("example.com"));
        assert!(!UrlValidator::check_syntax("//example.com"));
        assert!(!UrlValidator::check_syntax("http://"));
        assert!(!UrlValidator::check_syntax("not a url at all"));
    }

    #[tokio::test]
    async fn reachable_when_host_resolves() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_resolves()
            .withf(|host| host == "example.com")
            .returning(|_| true);

        let validator = validator(resolver);
        assert!(validator.check_reachable("https://example.com").await);
        assert!(validator.validate("https://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn unreachable_when_host_does_not_resolve() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolves().returning(|_| false);

        let validator = validator(resolver);
        assert!(
            !validator
                .check_reachable("http://thisdomaindoesnotexist.invalid")
                .await
        );

        let err = validator
            .validate("http://thisdomaindoesnotexist.invalid")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unreachable(_)));
    }

    #[tokio::test]
    async fn invalid_syntax_never_reaches_the_resolver() {
        // No expectations set: any resolver call would panic the test.
        let validator = validator(MockHostResolver::new());

        assert!(!validator.check_reachable("not a url at all").await);

        let err = validator.validate("ftp://example.com").await.unwrap_err();
        assert!(matches!(err, AppError::SyntaxInvalid(_)));
    }

    #[tokio::test]
    async fn ip_literal_hosts_skip_resolution() {
        let validator = validator(MockHostResolver::new());

        assert!(validator.check_reachable("http://127.0.0.1:8080/x").await);
        assert!(validator.check_reachable("http://[::1]/").await);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_resolver_reads_as_unreachable() {
        struct SlowResolver;

        #[async_trait]
        impl HostResolver for SlowResolver {
            async fn resolves(&self, _host: &str) -> bool {
                tokio::time::sleep(Duration::from_secs(30)).await;
                true
            }
        }

        let validator = UrlValidator::new(Arc::new(SlowResolver), Duration::from_secs(5));

        assert!(!validator.check_reachable("https://example.com").await);
    }
}
