//! Активная конфигурация процесса
//!
//! Вызовы без явного набора и подписи SM2 читают её при каждом обращении,
//! поэтому замена видна сразу всем потокам. Читатель получает `Arc` на
//! целый снимок и не может увидеть наполовину применённую конфигурацию.

use crate::config::Config;
use crate::crypto::suites::CipherSuite;
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};
use tracing::info;

static ACTIVE: OnceLock<RwLock<Arc<Config>>> = OnceLock::new();

// Тесты меняют глобальное состояние
#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

fn cell() -> &'static RwLock<Arc<Config>> {
    ACTIVE.get_or_init(|| RwLock::new(Arc::new(Config::default())))
}

/// Snapshot of the active configuration.
pub fn active_config() -> Arc<Config> {
    Arc::clone(&cell().read())
}

/// Current default suite.
pub fn default_suite() -> CipherSuite {
    cell().read().default_suite
}

/// Replaces the default suite and returns the previous one.
///
/// The rest of the active configuration is kept.
pub fn set_default_suite(suite: CipherSuite) -> CipherSuite {
    let previous = {
        let mut guard = cell().write();
        let previous = guard.default_suite;
        let mut next = Config::clone(&guard);
        next.default_suite = suite;
        *guard = Arc::new(next);
        previous
    };

    if previous != suite {
        info!(
            target: "crypto::selector",
            previous = %previous,
            current = %suite,
            "Default cipher suite changed"
        );
    }
    previous
}

/// Makes `config` the active configuration and returns the previous one.
///
/// Plugin init step; may be called again to hot-swap.
pub fn configure(config: Config) -> Arc<Config> {
    let next = Arc::new(config);
    let previous = std::mem::replace(&mut *cell().write(), Arc::clone(&next));

    info!(
        target: "crypto::selector",
        previous = %previous.default_suite,
        current = %next.default_suite,
        user_id_changed = previous.sm2_user_id != next.sm2_user_id,
        "Configuration applied"
    );
    previous
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_set_returns_previous() {
        let _guard = TEST_LOCK.lock();
        let original = set_default_suite(CipherSuite::National);
        assert_eq!(default_suite(), CipherSuite::National);
        assert_eq!(set_default_suite(original), CipherSuite::National);
        assert_eq!(default_suite(), original);
    }

    #[test]
    fn test_configure_from_mode() {
        let _guard = TEST_LOCK.lock();
        let config = Config::from_json(r#"{"mode": "gm"}"#).unwrap();
        let original = configure(config);
        assert_eq!(default_suite(), CipherSuite::National);

        configure(Config::default());
        assert_eq!(default_suite(), CipherSuite::Conventional);
        configure((*original).clone());
    }

    #[test]
    fn test_configure_applies_user_id() {
        let _guard = TEST_LOCK.lock();
        let config = Config::from_json(r#"{"mode": "gm", "sm2UserId": "alice"}"#).unwrap();
        let original = configure(config);

        let active = active_config();
        assert_eq!(active.default_suite, CipherSuite::National);
        assert_eq!(active.sm2_user_id, "alice");

        // Смена набора не трогает user id
        set_default_suite(CipherSuite::Conventional);
        assert_eq!(active_config().sm2_user_id, "alice");

        configure((*original).clone());
    }

    #[test]
    fn test_concurrent_readers_see_whole_values() {
        let _guard = TEST_LOCK.lock();
        let original = configure(Config::default());
        let stop = Arc::new(std::sync::atomic::AtomicBool::new(false));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let stop = Arc::clone(&stop);
                thread::spawn(move || {
                    let mut reads = 0usize;
                    while !stop.load(std::sync::atomic::Ordering::Relaxed) {
                        let config = active_config();
                        // Набор и user id всегда из одного снимка
                        match config.default_suite {
                            CipherSuite::National => assert_eq!(config.sm2_user_id, "gm-user"),
                            CipherSuite::Conventional => {
                                assert_ne!(config.sm2_user_id, "gm-user")
                            }
                        }
                        reads += 1;
                    }
                    reads
                })
            })
            .collect();

        for i in 0..200 {
            let config = if i % 2 == 0 {
                Config {
                    default_suite: CipherSuite::National,
                    sm2_user_id: "gm-user".to_string(),
                }
            } else {
                Config::default()
            };
            configure(config);
        }
        stop.store(true, std::sync::atomic::Ordering::Relaxed);

        for reader in readers {
            reader.join().unwrap();
        }
        configure((*original).clone());
    }
}
