use crate::types::alloc_type::{format, Cow, String};

/// Turns a plaintext password into the digest stored for a user.
pub trait PasswordHasher {
    fn hash(&self, password: &str) -> String;
}

/// Salted FNV-1a digest rendered as 16 hex digits.
///
/// Deterministic and dependency free, which keeps the example pipeline
/// reproducible. It is not a password hashing function: production code should
/// plug a memory-hard hasher in through [`PasswordHasher`].
///
/// # Examples
///
/// ```
/// use outcome_rail::registration::{FnvPasswordHasher, PasswordHasher};
///
/// let hasher = FnvPasswordHasher::default();
/// let digest = hasher.hash("Pass123!@#");
/// assert_eq!(digest.len(), 16);
/// assert_eq!(digest, hasher.hash("Pass123!@#"));
/// assert_ne!(digest, FnvPasswordHasher::with_salt("pepper").hash("Pass123!@#"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnvPasswordHasher {
    salt: Cow<'static, str>,
}

impl Default for FnvPasswordHasher {
    fn default() -> Self {
        Self::with_salt("outcome-rail")
    }
}

impl FnvPasswordHasher {
    pub fn with_salt<S>(salt: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self { salt: salt.into() }
    }
}

impl PasswordHasher for FnvPasswordHasher {
    fn hash(&self, password: &str) -> String {
        const FNV_OFFSET: u64 = 0xcbf29ce484222325;
        let mut hash = FNV_OFFSET;

        hash_bytes(&mut hash, b"salt:");
        hash_bytes(&mut hash, self.salt.as_bytes());
        hash_bytes(&mut hash, b"pw:");
        hash_bytes(&mut hash, password.as_bytes());

        format!("{hash:016x}")
    }
}

/// FNV-1a prime constant for 64-bit hash.
const FNV_PRIME: u64 = 0x100000001b3;

#[inline(always)]
fn hash_bytes(hash: &mut u64, bytes: &[u8]) {
    for &byte in bytes {
        *hash ^= byte as u64;
        *hash = hash.wrapping_mul(FNV_PRIME);
    }
}
