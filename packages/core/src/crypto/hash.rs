//! Потоковый хеш: дайджест набора или отдельный алгоритм.
//!
//! MD5 и SHA-1 нужны только для совместимости (контрольные суммы, старые
//! протоколы), ни один набор их не использует.

use crate::crypto::suites::CipherSuite;
use crate::error::Result;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use sm3::Sm3;
use std::fmt;

/// Streaming accumulator over one digest algorithm.
///
/// Owned by the caller; append with [`update`](Self::update) or the chainable
/// `add*` methods, then consume with [`finalize`](Self::finalize).
#[derive(Clone)]
pub enum SuiteHasher {
    Sha512(Sha512),
    Sm3(Sm3),
    Sha256(Sha256),
    Sha1(Sha1),
    Md5(Md5),
}

impl SuiteHasher {
    /// The suite's own digest: SHA-512 or SM3.
    pub fn for_suite(suite: CipherSuite) -> Self {
        match suite {
            CipherSuite::Conventional => Self::new_sha512(),
            CipherSuite::National => Self::new_sm3(),
        }
    }

    pub fn new_sha256() -> Self {
        Self::Sha256(Sha256::new())
    }

    pub fn new_sha512() -> Self {
        Self::Sha512(Sha512::new())
    }

    pub fn new_sm3() -> Self {
        Self::Sm3(Sm3::new())
    }

    pub fn new_sha1() -> Self {
        Self::Sha1(Sha1::new())
    }

    pub fn new_md5() -> Self {
        Self::Md5(Md5::new())
    }

    /// Suite whose digest this is, `None` for the standalone algorithms.
    pub fn suite(&self) -> Option<CipherSuite> {
        match self {
            Self::Sha512(_) => Some(CipherSuite::Conventional),
            Self::Sm3(_) => Some(CipherSuite::National),
            Self::Sha256(_) | Self::Sha1(_) | Self::Md5(_) => None,
        }
    }

    pub fn algorithm(&self) -> &'static str {
        match self {
            Self::Sha512(_) => "SHA-512",
            Self::Sm3(_) => "SM3",
            Self::Sha256(_) => "SHA-256",
            Self::Sha1(_) => "SHA-1",
            Self::Md5(_) => "MD5",
        }
    }

    /// Digest length in bytes.
    pub fn output_size(&self) -> usize {
        match self {
            Self::Sha512(_) => <Sha512 as Digest>::output_size(),
            Self::Sm3(_) => <Sm3 as Digest>::output_size(),
            Self::Sha256(_) => <Sha256 as Digest>::output_size(),
            Self::Sha1(_) => <Sha1 as Digest>::output_size(),
            Self::Md5(_) => <Md5 as Digest>::output_size(),
        }
    }

    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        match self {
            Self::Sha512(h) => Digest::update(h, data),
            Self::Sm3(h) => Digest::update(h, data),
            Self::Sha256(h) => Digest::update(h, data),
            Self::Sha1(h) => Digest::update(h, data),
            Self::Md5(h) => Digest::update(h, data),
        }
    }

    /// Appends UTF-8 text.
    pub fn add(&mut self, data: &str) -> &mut Self {
        self.update(data.as_bytes());
        self
    }

    pub fn add_bytes(&mut self, data: &[u8]) -> &mut Self {
        self.update(data);
        self
    }

    /// Appends the bytes a hex string decodes to.
    pub fn add_hex(&mut self, data: &str) -> Result<&mut Self> {
        let bytes = hex::decode(data)?;
        self.update(&bytes);
        Ok(self)
    }

    pub fn finalize(self) -> Vec<u8> {
        match self {
            Self::Sha512(h) => h.finalize().to_vec(),
            Self::Sm3(h) => h.finalize().to_vec(),
            Self::Sha256(h) => h.finalize().to_vec(),
            Self::Sha1(h) => h.finalize().to_vec(),
            Self::Md5(h) => h.finalize().to_vec(),
        }
    }

    pub fn finalize_hex(self) -> String {
        hex::encode(self.finalize())
    }
}

impl fmt::Debug for SuiteHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiteHasher")
            .field("algorithm", &self.algorithm())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SM3_ABC: &str = "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0";
    const SHA512_ABC: &str = "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                              2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f";

    #[test]
    fn test_known_digests() {
        let mut sm3 = SuiteHasher::for_suite(CipherSuite::National);
        sm3.add("abc");
        assert_eq!(sm3.finalize_hex(), SM3_ABC);

        let mut sha = SuiteHasher::for_suite(CipherSuite::Conventional);
        sha.add("abc");
        assert_eq!(sha.finalize_hex(), SHA512_ABC);
    }

    #[test]
    fn test_chained_appends_match_single_update() {
        let mut chained = SuiteHasher::for_suite(CipherSuite::National);
        chained.add("a").add_bytes(b"b").add_hex("63").unwrap();

        let mut single = SuiteHasher::for_suite(CipherSuite::National);
        single.update(b"abc");

        assert_eq!(chained.finalize(), single.finalize());
    }

    #[test]
    fn test_add_hex_rejects_invalid() {
        let mut hasher = SuiteHasher::for_suite(CipherSuite::Conventional);
        assert!(hasher.add_hex("zz").is_err());
    }

    #[test]
    fn test_metadata() {
        let sha = SuiteHasher::for_suite(CipherSuite::Conventional);
        assert_eq!(sha.output_size(), 64);
        assert_eq!(sha.algorithm(), "SHA-512");
        assert_eq!(sha.suite(), Some(CipherSuite::Conventional));

        let sm3 = SuiteHasher::for_suite(CipherSuite::National);
        assert_eq!(sm3.output_size(), 32);
        assert_eq!(format!("{:?}", sm3), "SuiteHasher { algorithm: \"SM3\", .. }");

        let md5 = SuiteHasher::new_md5();
        assert_eq!(md5.output_size(), 16);
        assert_eq!(md5.suite(), None);
        assert_eq!(SuiteHasher::new_sha1().output_size(), 20);
    }

    #[test]
    fn test_typed_constructors_abc() {
        let cases = [
            (SuiteHasher::new_md5(), "MD5", "900150983cd24fb0d6963f7d28e17f72"),
            (
                SuiteHasher::new_sha1(),
                "SHA-1",
                "a9993e364706816aba3e25717850c26c9cd0d89d",
            ),
            (
                SuiteHasher::new_sha256(),
                "SHA-256",
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ),
            (SuiteHasher::new_sha512(), "SHA-512", SHA512_ABC),
            (SuiteHasher::new_sm3(), "SM3", SM3_ABC),
        ];

        for (mut hasher, algorithm, expected) in cases {
            assert_eq!(hasher.algorithm(), algorithm);
            hasher.add("a").add("bc");
            assert_eq!(hasher.finalize_hex(), expected, "{algorithm}");
        }
    }
}
