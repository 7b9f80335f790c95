use super::{Demo, DemoContext};
use crate::error::Result;
use sha2::{Digest, Sha256};
use sha3::Sha3_256;

/// PBKDF2-HMAC-SHA256 of `password` and `salt`, `key_len` bytes long.
pub fn derive_key(password: &str, salt: &str, iterations: u32, key_len: usize) -> Vec<u8> {
    let mut key = vec![0u8; key_len];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut key);
    key
}

pub fn sha3_256_hex(input: &str) -> String {
    hex::encode(Sha3_256::digest(input.as_bytes()))
}

pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

pub struct CryptoDemo;

impl Demo for CryptoDemo {
    fn name(&self) -> &'static str {
        "crypto"
    }

    fn title(&self) -> &'static str {
        "Key derivation and digests"
    }

    fn run(&self, ctx: &DemoContext) -> Result<Vec<String>> {
        let crypto = &ctx.config.crypto;
        let key = derive_key(&crypto.password, &crypto.salt, crypto.iterations, crypto.key_len);
        Ok(vec![
            format!("Derived key (PBKDF2): {}", hex::encode(key)),
            format!("SHA3-256 digest: {}", sha3_256_hex(&crypto.digest_input)),
            format!("SHA-256 digest: {}", sha256_hex(&crypto.digest_input)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pbkdf2_known_vector() {
        assert_eq!(
            hex::encode(derive_key("password", "salt", 1, 32)),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }

    #[test]
    fn derived_key_has_requested_length() {
        assert_eq!(derive_key("pw", "salt", 2, 16).len(), 16);
        assert_eq!(derive_key("pw", "salt", 2, 64).len(), 64);
    }

    #[test]
    fn digest_known_vectors() {
        assert_eq!(
            sha3_256_hex("abc"),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn demo_uses_configured_inputs() {
        let mut ctx = DemoContext::default();
        ctx.config.crypto.iterations = 1;
        ctx.config.crypto.digest_input = "abc".to_string();
        let lines = CryptoDemo.run(&ctx).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Derived key (PBKDF2): "));
        assert_eq!(lines[0].len(), "Derived key (PBKDF2): ".len() + 64);
        assert!(lines[1].ends_with("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"));
    }
}
