//! Rate limiting middleware using governor and `tower_governor`.
//!
//! The only throttled route is the contact form, which relays mail to a
//! real inbox: `contact_rate_limiter` allows about 5 submissions per
//! minute per origin.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

// =============================================================================
// Origin Key Extractor
// =============================================================================

/// Key extractor that resolves the calling origin's IP.
///
/// Checks proxy headers first (`X-Forwarded-For`, then `X-Real-IP`) and
/// falls back to the peer address for direct connections. The router must
/// be served with `into_make_service_with_connect_info` for the fallback
/// to be available.
#[derive(Clone, Copy)]
pub struct OriginKeyExtractor;

impl tower_governor::key_extractor::KeyExtractor for OriginKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let headers = req.headers();

        // Try X-Forwarded-For (first IP in the chain)
        if let Some(ip) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // Try X-Real-IP
        if let Some(ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // Fall back to the connection's peer address
        if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
            return Ok(addr.ip());
        }

        Err(GovernorError::UnableToExtractKey)
    }
}

// =============================================================================
// Rate Limiter Configuration
// =============================================================================

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<OriginKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create the contact form rate limiter: ~5 submissions per minute per origin.
///
/// Configuration: 1 token every 12 seconds (replenish), burst of 5, so a
/// quiet origin can submit 5 times back to back before throttling kicks in.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid positive
/// integers (`per_second(12)` and `burst_size(5)`), which are always accepted
/// by `GovernorConfigBuilder`.
#[must_use]
pub fn contact_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(OriginKeyExtractor)
        .per_second(12) // Replenish 1 token every 12 seconds (~5/minute)
        .burst_size(5) // Allow burst of 5 requests
        .finish()
        .expect("rate limiter config with per_second(12) and burst_size(5) is valid");
    GovernorLayer::new(Arc::new(config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tower_governor::key_extractor::KeyExtractor;

    use super::*;

    fn request() -> Request<()> {
        Request::builder().body(()).unwrap()
    }

    #[test]
    fn test_forwarded_for_takes_first_hop() {
        let req = Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .header("x-real-ip", "198.51.100.2")
            .body(())
            .unwrap();

        let key = OriginKeyExtractor.extract(&req).unwrap();
        assert_eq!(key, "203.0.113.7".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_real_ip_used_when_forwarded_for_absent() {
        let req = Request::builder()
            .header("x-real-ip", "198.51.100.2")
            .body(())
            .unwrap();

        let key = OriginKeyExtractor.extract(&req).unwrap();
        assert_eq!(key, "198.51.100.2".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_peer_address_fallback() {
        let mut req = request();
        let addr: SocketAddr = "192.0.2.4:55000".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));

        let key = OriginKeyExtractor.extract(&req).unwrap();
        assert_eq!(key, "192.0.2.4".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_no_origin_is_an_error() {
        let req = request();
        assert!(OriginKeyExtractor.extract(&req).is_err());
    }

    #[test]
    fn test_unparseable_header_falls_through() {
        let mut req = Request::builder()
            .header("x-forwarded-for", "not-an-ip")
            .body(())
            .unwrap();
        let addr: SocketAddr = "192.0.2.4:55000".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));

        let key = OriginKeyExtractor.extract(&req).unwrap();
        assert_eq!(key, "192.0.2.4".parse::<IpAddr>().unwrap());
    }
}
