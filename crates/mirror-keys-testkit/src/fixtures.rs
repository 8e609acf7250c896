//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::io::Write;

use mirror_keys_core::{Ed25519PublicKey, Key, KeyList, Keypair};
use tempfile::NamedTempFile;

/// A test fixture with a deterministic set of keypairs.
pub struct KeyFixture {
    pub keypairs: Vec<Keypair>,
}

impl KeyFixture {
    /// Create a fixture with `count` keypairs seeded by their index.
    pub fn new(count: usize) -> Self {
        let keypairs = (0..count)
            .map(|i| {
                let mut seed = [0u8; 32];
                seed[0] = i as u8;
                seed[31] = 0x5a;
                Keypair::from_seed(&seed)
            })
            .collect();
        Self { keypairs }
    }

    /// Public key of the `index`-th keypair.
    pub fn public_key(&self, index: usize) -> Ed25519PublicKey {
        self.keypairs[index].public_key()
    }

    /// Single key of the `index`-th keypair.
    pub fn key(&self, index: usize) -> Key {
        Key::Ed25519(self.public_key(index))
    }

    /// Key list of all keypairs in order.
    pub fn key_list(&self) -> Key {
        Key::List(
            self.keypairs
                .iter()
                .map(|kp| Key::Ed25519(kp.public_key()))
                .collect::<KeyList>(),
        )
    }

    /// Entity CSV with one row per keypair plus a keyless row.
    ///
    /// Entity ids are `0.0.{1001 + index}`; the keyless row is `0.0.1000`.
    pub fn entity_csv(&self) -> String {
        let mut csv = String::from("entity,memo,key\n0.0.1000,no key,\n");
        for (i, kp) in self.keypairs.iter().enumerate() {
            csv.push_str(&format!("0.0.{},account {},{}\n", 1001 + i, i, kp.public_key()));
        }
        csv
    }

    /// Write [`KeyFixture::entity_csv`] to a temporary file.
    pub fn entity_csv_file(&self) -> std::io::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(self.entity_csv().as_bytes())?;
        file.flush()?;
        Ok(file)
    }
}

impl Default for KeyFixture {
    fn default() -> Self {
        Self::new(3)
    }
}

/// A key with a random public key.
pub fn random_key() -> Key {
    Key::Ed25519(Keypair::generate().public_key())
}
