use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use thiserror::Error;

/// A variable is set but its value is not valid unicode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("value is not valid unicode: {lossy:?}")]
pub struct NotUnicode {
    /// The value with invalid sequences replaced by U+FFFD, for reporting only.
    pub lossy: String,
}

/// Port trait for reading configuration variables
///
/// The loader asks for one variable at a time and only distinguishes
/// "set" from "unset". An empty value is set.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use envcfg::domain::ports::EnvSource;
///
/// let env = HashMap::from([("LOG_LEVEL", "debug")]);
/// assert_eq!(env.get_var("LOG_LEVEL"), Ok(Some("debug".to_string())));
/// assert_eq!(env.get_var("LOG_FORMAT"), Ok(None));
/// ```
pub trait EnvSource {
    /// Value of `key`, or `Ok(None)` if it is not set.
    fn get_var(&self, key: &str) -> Result<Option<String>, NotUnicode>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get_var(&self, key: &str) -> Result<Option<String>, NotUnicode> {
        std::env::var_os(key)
            .map(|value| {
                value.into_string().map_err(|raw| NotUnicode {
                    lossy: raw.to_string_lossy().into_owned(),
                })
            })
            .transpose()
    }
}

impl<K, V, S> EnvSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get_var(&self, key: &str) -> Result<Option<String>, NotUnicode> {
        Ok(self.get(key).map(|value| value.as_ref().to_string()))
    }
}

impl<K, V> EnvSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn get_var(&self, key: &str) -> Result<Option<String>, NotUnicode> {
        Ok(self.get(key).map(|value| value.as_ref().to_string()))
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get_var(&self, key: &str) -> Result<Option<String>, NotUnicode> {
        (**self).get_var(key)
    }
}
