use piq_config::PiqConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PiqConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PiqConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.agent.is_configured() && has_env_prefix(&env_keys, "PROSPECTIQ_AGENT") {
        warnings.push(
            "Agent config appears default while PROSPECTIQ_AGENT* env vars exist. Use double underscores (example: PROSPECTIQ_AGENT__BASE_URL)."
                .to_string(),
        );
    }

    if config.storage.data_dir == piq_config::StorageConfig::default().data_dir
        && has_env_prefix(&env_keys, "PROSPECTIQ_STORAGE")
    {
        warnings.push(
            "Storage config appears default while PROSPECTIQ_STORAGE* env vars exist. Use double underscores (example: PROSPECTIQ_STORAGE__DATA_DIR)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
