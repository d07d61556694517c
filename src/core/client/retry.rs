use crate::core::PulseError;
use rand::Rng;
use std::time::Duration;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
        /// Whether to apply random jitter (+/- 50%) to the delay.
        jitter: bool,
    },
}

/// Configuration for the automatic retry mechanism.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 4,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(200),
                factor: 2.0,
                max: Duration::from_secs(3),
                jitter: true,
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

impl RetryConfig {
    /// A policy that never retries. Handy for tests that assert on the first
    /// response a server produces.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn delay_for(&self, attempt: u32) -> Duration {
        match &self.backoff {
            Backoff::Fixed(d) => *d,
            Backoff::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                // Computed in seconds so an oversized factor saturates at
                // the cap instead of overflowing `Duration`.
                let secs = base.as_secs_f64() * factor.powi(attempt as i32);
                let capped =
                    Duration::try_from_secs_f64(secs.min(max.as_secs_f64())).unwrap_or(*max);
                if *jitter {
                    capped.mul_f64(rand::rng().random_range(0.5..1.5))
                } else {
                    capped
                }
            }
        }
    }
}

impl super::PulseClient {
    /// Send a request, retrying transient failures per the effective policy.
    ///
    /// The request builder is cloned before each attempt; a non-clonable
    /// request (streaming body) is sent exactly once.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, PulseError> {
        let cfg = retry_override.unwrap_or(self.retry_config());
        let mut attempt: u32 = 0;

        loop {
            let this_try = match req.try_clone() {
                Some(clone) => clone,
                // Non-clonable request: single shot, no retries possible.
                None => return Ok(req.send().await?),
            };

            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if cfg.enabled
                        && attempt < cfg.max_retries
                        && cfg.retry_on_status.contains(&status)
                    {
                        tokio::time::sleep(cfg.delay_for(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(err) => {
                    let transient = (err.is_timeout() && cfg.retry_on_timeout)
                        || (err.is_connect() && cfg.retry_on_connect);
                    if cfg.enabled && attempt < cfg.max_retries && transient {
                        tokio::time::sleep(cfg.delay_for(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(err.into());
                }
            }
        }
    }
}
