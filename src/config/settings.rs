use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_DB_PATH: &str = "data/wallet";

const DB_PATH_KEY: &str = "WALLET_DB_PATH";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let mut db_path = String::from(DEFAULT_DB_PATH);
        if let Ok(path) = env::var(DB_PATH_KEY) {
            db_path = path;
        }

        let mut map = HashMap::new();
        map.insert(String::from(DB_PATH_KEY), db_path);

        Config {
            inner: RwLock::new(map),
        }
    }

    /// Directory the wallet store lives in, relative paths resolve against the cwd
    pub fn get_db_path(&self) -> PathBuf {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        let path = inner
            .get(DB_PATH_KEY)
            .map(String::as_str)
            .unwrap_or(DEFAULT_DB_PATH);
        PathBuf::from(path)
    }

    pub fn set_db_path(&self, path: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(DB_PATH_KEY), path);
    }
}
