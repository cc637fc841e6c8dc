//! Timeout and retry policy around a gateway charge.

use std::time::Duration;

use super::{PaymentError, PaymentGateway, PaymentResult, Receipt};
use crate::config::PaymentConfig;

/// How a submission talks to the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionPolicy {
    /// Upper bound on a single charge attempt
    pub attempt_timeout: Duration,
    /// Total attempts, including the first (at least 1)
    pub max_attempts: u32,
    /// Pause between attempts
    pub retry_backoff: Duration,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self::from(&PaymentConfig::default())
    }
}

impl From<&PaymentConfig> for SubmissionPolicy {
    fn from(config: &PaymentConfig) -> Self {
        Self {
            attempt_timeout: Duration::from_millis(config.attempt_timeout_ms),
            max_attempts: config.max_attempts.max(1),
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        }
    }
}

/// Charge through `gateway`, retrying transient failures with the same key.
pub async fn charge_with_policy(
    gateway: &dyn PaymentGateway,
    amount: u64,
    idempotency_key: &str,
    policy: &SubmissionPolicy,
) -> PaymentResult<Receipt> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        tracing::debug!(attempt, amount, "charging payment gateway");

        let outcome = match tokio::time::timeout(
            policy.attempt_timeout,
            gateway.charge(amount, idempotency_key),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(PaymentError::Timeout),
        };

        match outcome {
            Ok(receipt) => return Ok(receipt),
            Err(err) if err.is_transient() && attempt < max_attempts => {
                tracing::warn!(attempt, error = %err, "transient payment failure, retrying");
                attempt += 1;
                tokio::time::sleep(policy.retry_backoff).await;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Gateway replaying a scripted sequence of outcomes.
    struct ScriptedGateway {
        script: Mutex<VecDeque<PaymentResult<()>>>,
        keys: Mutex<Vec<String>>,
        delay: Duration,
    }

    impl ScriptedGateway {
        fn new(script: Vec<PaymentResult<()>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                keys: Mutex::new(Vec::new()),
                delay: Duration::ZERO,
            }
        }
    }

    #[async_trait]
    impl PaymentGateway for ScriptedGateway {
        async fn charge(&self, amount: u64, idempotency_key: &str) -> PaymentResult<Receipt> {
            self.keys.lock().unwrap().push(idempotency_key.to_string());
            tokio::time::sleep(self.delay).await;
            let next = self.script.lock().unwrap().pop_front().unwrap_or(Ok(()));
            next.map(|_| Receipt {
                reference: "ref-1".into(),
                amount,
                idempotency_key: idempotency_key.to_string(),
                charged_at: chrono::Utc::now(),
            })
        }
    }

    fn policy(max_attempts: u32) -> SubmissionPolicy {
        SubmissionPolicy {
            attempt_timeout: Duration::from_secs(5),
            max_attempts,
            retry_backoff: Duration::from_millis(100),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failures_retried_with_same_key() {
        let gateway = ScriptedGateway::new(vec![
            Err(PaymentError::Network("connection reset".into())),
            Err(PaymentError::Unavailable("503".into())),
            Ok(()),
        ]);

        let receipt = charge_with_policy(&gateway, 499, "key-1", &policy(3))
            .await
            .unwrap();

        assert_eq!(receipt.amount, 499);
        let keys = gateway.keys.lock().unwrap().clone();
        assert_eq!(keys, vec!["key-1", "key-1", "key-1"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_decline_not_retried() {
        let gateway = ScriptedGateway::new(vec![Err(PaymentError::Declined("insufficient funds".into()))]);

        let err = charge_with_policy(&gateway, 499, "key-1", &policy(3))
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::Declined(_)));
        assert_eq!(gateway.keys.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempts_exhausted() {
        let gateway = ScriptedGateway::new(vec![
            Err(PaymentError::Network("down".into())),
            Err(PaymentError::Network("down".into())),
        ]);

        let err = charge_with_policy(&gateway, 499, "key-1", &policy(2))
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::Network(_)));
        assert_eq!(gateway.keys.lock().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_gateway_times_out() {
        let mut gateway = ScriptedGateway::new(vec![]);
        gateway.delay = Duration::from_secs(60);

        let err = charge_with_policy(&gateway, 499, "key-1", &policy(1))
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::Timeout));
    }

    #[test]
    fn test_policy_from_config_has_at_least_one_attempt() {
        let config = PaymentConfig {
            max_attempts: 0,
            ..PaymentConfig::default()
        };
        assert_eq!(SubmissionPolicy::from(&config).max_attempts, 1);
    }
}
