//! Secret Source Port
//!
//! Where the exposed secret comes from: an environment lookup, an
//! interactive masked prompt, or a fixed value in tests.

use std::io;

use crate::domain::value_objects::ExposedSecret;

pub trait SecretSource {
    /// Read the secret. `Ok(None)` means nothing was entered.
    fn read_secret(&self, prompt: &str) -> io::Result<Option<ExposedSecret>>;
}
