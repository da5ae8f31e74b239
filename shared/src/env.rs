use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Reads `ENV` and falls back to the build profile when it is unset or unknown.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV").as_deref() {
        Ok("development") => Environment::Development,
        Ok("production") => Environment::Production,
        _ => default_env,
    }
}
