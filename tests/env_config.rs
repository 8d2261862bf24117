//! Reads configuration through the real process environment. Kept in its own
//! test binary so env mutation cannot race other tests; the steps run inside
//! a single test function for the same reason.

use backend::config::Config;
use backend::error::AppError;

#[test]
fn from_env_honors_the_process_environment() {
    std::env::remove_var("DATABASE_URL");
    std::env::remove_var("SECRET_KEY");
    std::env::remove_var("PORT");

    // Nothing set: the connection string is the first thing checked
    assert!(matches!(
        Config::from_env(),
        Err(AppError::MissingVar("DATABASE_URL"))
    ));

    std::env::set_var("DATABASE_URL", "postgres://app@db:5432/app");
    assert!(matches!(
        Config::from_env(),
        Err(AppError::MissingVar("SECRET_KEY"))
    ));

    std::env::set_var("SECRET_KEY", "from-the-environment");
    std::env::set_var("PORT", "9090");

    let config = Config::from_env().unwrap();
    assert_eq!(config.database_url, "postgres://app@db:5432/app");
    assert_eq!(config.secret_key, "from-the-environment");
    assert_eq!(config.port, 9090);

    // Same environment, same config
    assert_eq!(config, Config::from_env().unwrap());
}
