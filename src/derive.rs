// src/derive.rs
//! Derivation orchestrator — the one public operation
//!
//! validate policy → normalize identifier → stretch (the only suspension
//! point) → map. Strength classification is a separate call on the result.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::aliases::{DerivedPassword, KdfInput, MasterSecret, SecretKey};
use crate::charset::CharsetPolicy;
use crate::error::{CoreError, Result};
use crate::kdf::{self, KeyStretcher, Pbkdf2Sha256};
use crate::mapper::map_password;
use crate::normalize::normalize_identifier;

/// Everything secret (and contextual) that goes into one derivation
///
/// Created per call, never stored. The master secret and secret key wipe
/// themselves on drop.
#[derive(Clone)]
pub struct SecretMaterial {
    master_secret: MasterSecret,
    site_identifier: String,
    secret_key: SecretKey,
    username: String,
}

impl SecretMaterial {
    pub fn new(
        master_secret: impl Into<String>,
        site_identifier: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            master_secret: MasterSecret::new(master_secret.into()),
            site_identifier: site_identifier.into(),
            secret_key: SecretKey::new(secret_key.into()),
            username: String::new(),
        }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn site_identifier(&self) -> &str {
        &self.site_identifier
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Normalized domain plus the concatenated KDF input
    fn prepare(&self) -> (String, KdfInput) {
        let domain = normalize_identifier(&self.site_identifier);
        let input = kdf::assemble_input(
            &self.master_secret,
            &domain,
            &self.secret_key,
            &self.username,
        );
        (domain, input)
    }
}

impl std::fmt::Debug for SecretMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretMaterial")
            .field("master_secret", &"[REDACTED]")
            .field("site_identifier", &self.site_identifier)
            .field("secret_key", &"[REDACTED]")
            .field("username", &self.username)
            .finish()
    }
}

/// Derive the password for `material` under `policy` with PBKDF2-HMAC-SHA256
pub fn derive_password(
    material: &SecretMaterial,
    policy: &CharsetPolicy,
) -> Result<DerivedPassword> {
    derive_password_with(&Pbkdf2Sha256, material, policy)
}

/// Same as [`derive_password`], stretching through `stretcher`
pub fn derive_password_with<S>(
    stretcher: &S,
    material: &SecretMaterial,
    policy: &CharsetPolicy,
) -> Result<DerivedPassword>
where
    S: KeyStretcher + ?Sized,
{
    policy.validate()?;

    let (domain, input) = material.prepare();
    let block = stretcher.stretch(&input, kdf::salt_for(&domain).as_bytes())?;
    drop(input);

    map_password(&block, policy)
}

/// Flat entry point for collaborators that hold plain strings
///
/// `username` of `None` is the same as an empty username.
pub fn derive_deterministic_password(
    master_secret: &str,
    site_identifier: &str,
    secret_key: &str,
    username: Option<&str>,
    policy: &CharsetPolicy,
) -> Result<DerivedPassword> {
    let material = SecretMaterial::new(master_secret, site_identifier, secret_key)
        .with_username(username.unwrap_or_default());
    derive_password(&material, policy)
}

/// Async derivation; the KDF runs on tokio's blocking pool
///
/// Policy errors come back before anything is scheduled. Dropping the future
/// abandons the result; the blocking task's buffers are wiped when it ends.
pub async fn derive_password_async(
    material: SecretMaterial,
    policy: CharsetPolicy,
) -> Result<DerivedPassword> {
    derive_password_async_with(Arc::new(Pbkdf2Sha256), material, policy).await
}

/// Async derivation through a shared `stretcher`
pub async fn derive_password_async_with<S>(
    stretcher: Arc<S>,
    material: SecretMaterial,
    policy: CharsetPolicy,
) -> Result<DerivedPassword>
where
    S: KeyStretcher + Send + Sync + 'static,
{
    policy.validate()?;

    let (domain, input) = material.prepare();
    drop(material);

    let block = tokio::task::spawn_blocking(move || {
        stretcher.stretch(&input, kdf::salt_for(&domain).as_bytes())
    })
    .await
    .map_err(|_| CoreError::DerivationUnavailable)??;

    map_password(&block, &policy)
}

/// Outcome of a sequenced derivation
#[derive(Debug)]
pub enum Sequenced<T> {
    /// No newer request was issued while this one ran
    Latest(T),
    /// A newer request was issued; this result must not be shown
    Superseded,
}

impl<T> Sequenced<T> {
    pub fn latest(self) -> Option<T> {
        match self {
            Sequenced::Latest(value) => Some(value),
            Sequenced::Superseded => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Sequenced::Superseded)
    }
}

/// Last-requested-wins gate for derivations fired in quick succession
///
/// Each `derive` takes a ticket when it is called. A result whose ticket is no
/// longer the newest comes back as `Superseded`, even if it finishes last.
#[derive(Debug, Clone, Default)]
pub struct DerivationSequencer {
    latest: Arc<AtomicU64>,
}

impl DerivationSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the newest ticket, invalidating every earlier one
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    /// Sequenced derivation with PBKDF2-HMAC-SHA256
    ///
    /// The ticket is claimed when this is called, not when the future is
    /// first polled, so call order decides which request is newest.
    pub fn derive(
        &self,
        material: SecretMaterial,
        policy: CharsetPolicy,
    ) -> impl Future<Output = Sequenced<Result<DerivedPassword>>> + '_ {
        self.derive_with(Arc::new(Pbkdf2Sha256), material, policy)
    }

    pub fn derive_with<S>(
        &self,
        stretcher: Arc<S>,
        material: SecretMaterial,
        policy: CharsetPolicy,
    ) -> impl Future<Output = Sequenced<Result<DerivedPassword>>> + '_
    where
        S: KeyStretcher + Send + Sync + 'static,
    {
        let ticket = self.issue();
        async move {
            let outcome = derive_password_async_with(stretcher, material, policy).await;
            if self.is_current(ticket) {
                Sequenced::Latest(outcome)
            } else {
                Sequenced::Superseded
            }
        }
    }
}
