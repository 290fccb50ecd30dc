//! Random password generation.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// Letters, digits and `!@#$%^&*()?`.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                    abcdefghijklmnopqrstuvwxyz\
                                    0123456789\
                                    !@#$%^&*()?";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Generator alphabet is empty")]
    EmptyAlphabet,
    #[error("Password length must be greater than zero")]
    ZeroLength,
}

/// Length and alphabet for [`generate_password_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: usize,
    pub alphabet: Vec<char>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            alphabet: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(length: usize, alphabet: &str) -> Result<Self, GeneratorError> {
        let config = Self {
            length,
            alphabet: alphabet.chars().collect(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.alphabet.is_empty() {
            return Err(GeneratorError::EmptyAlphabet);
        }
        if self.length == 0 {
            return Err(GeneratorError::ZeroLength);
        }
        Ok(())
    }
}

/// Generates a password by drawing each character independently and
/// uniformly from the config's alphabet. Characters may repeat.
pub fn generate_password_with<R: Rng>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<SecretString, GeneratorError> {
    config.validate()?;
    Ok(draw(rng, &config.alphabet, config.length))
}

/// Generates a 12-character password from [`DEFAULT_ALPHABET`] using the
/// thread-local CSPRNG.
pub fn generate_password() -> SecretString {
    let alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
    draw(&mut rand::rng(), &alphabet, DEFAULT_PASSWORD_LENGTH)
}

// `alphabet` must be non-empty.
fn draw<R: Rng>(rng: &mut R, alphabet: &[char], length: usize) -> SecretString {
    let password: String = (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect();

    SecretString::new(password.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use secrecy::ExposeSecret;

    #[test]
    fn test_default_alphabet_contents() {
        assert_eq!(DEFAULT_ALPHABET.chars().count(), 73);
        assert!(DEFAULT_ALPHABET.contains('A'));
        assert!(DEFAULT_ALPHABET.contains('z'));
        assert!(DEFAULT_ALPHABET.contains('0'));
        assert!(DEFAULT_ALPHABET.contains('?'));
        assert!(!DEFAULT_ALPHABET.contains(' '));
    }

    #[test]
    fn test_generate_password_length_and_alphabet() {
        for _ in 0..200 {
            let pwd = generate_password();
            let pwd = pwd.expose_secret();
            assert_eq!(pwd.chars().count(), DEFAULT_PASSWORD_LENGTH);
            assert!(pwd.chars().all(|c| DEFAULT_ALPHABET.contains(c)), "{pwd}");
        }
    }

    #[test]
    fn test_generate_password_varies() {
        let first = generate_password();
        let differs = (0..10).any(|_| generate_password().expose_secret() != first.expose_secret());
        assert!(differs);
    }

    #[test]
    fn test_generate_with_seeded_rng_is_reproducible() {
        let config = GeneratorConfig::default();
        let a = generate_password_with(&mut StdRng::seed_from_u64(7), &config).unwrap();
        let b = generate_password_with(&mut StdRng::seed_from_u64(7), &config).unwrap();
        assert_eq!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn test_generate_with_allows_repeats() {
        let config = GeneratorConfig::new(20, "ab").unwrap();
        let pwd = generate_password_with(&mut StdRng::seed_from_u64(1), &config).unwrap();
        let pwd = pwd.expose_secret();
        assert_eq!(pwd.len(), 20);
        assert!(pwd.chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn test_generate_with_single_char_alphabet() {
        let config = GeneratorConfig::new(5, "x").unwrap();
        let pwd = generate_password_with(&mut rand::rng(), &config).unwrap();
        assert_eq!(pwd.expose_secret(), "xxxxx");
    }

    #[test]
    fn test_config_rejects_empty_alphabet() {
        assert_eq!(GeneratorConfig::new(12, ""), Err(GeneratorError::EmptyAlphabet));
    }

    #[test]
    fn test_config_rejects_zero_length() {
        assert_eq!(GeneratorConfig::new(0, "abc"), Err(GeneratorError::ZeroLength));

        let config = GeneratorConfig {
            length: 0,
            ..GeneratorConfig::default()
        };
        let result = generate_password_with(&mut rand::rng(), &config);
        assert!(matches!(result, Err(GeneratorError::ZeroLength)));
    }
}
