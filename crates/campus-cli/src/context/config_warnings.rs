use campus_config::{Backend, CampusConfig};

const SECTIONS: [(&str, &str); 4] = [
    ("API", "CAMPUS_API__BASE_URL"),
    ("MOCK", "CAMPUS_MOCK__LATENCY_MS"),
    ("SESSION", "CAMPUS_SESSION__PATH"),
    ("GENERAL", "CAMPUS_GENERAL__DEFAULT_LIMIT"),
];

/// Emit warnings for env vars that were most likely meant to configure Campus but did not.
pub fn warn_unconfigured(config: &CampusConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CampusConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for (section, example) in SECTIONS {
        let single = format!("CAMPUS_{section}_");
        let double = format!("CAMPUS_{section}__");
        if env_keys
            .iter()
            .any(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "CAMPUS_{section}_* env vars are ignored. Use double underscores (example: {example})."
            ));
        }
    }

    if config.api.backend == Backend::Mock
        && env_keys.iter().any(|key| key == "CAMPUS_API__BASE_URL")
    {
        warnings.push(
            "CAMPUS_API__BASE_URL is set but the mock backend is active. Set CAMPUS_API__BACKEND=rest to use it."
                .to_string(),
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use campus_config::{ApiConfig, Backend, CampusConfig};

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), String::from("x")))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &CampusConfig::default(),
            env(&["CAMPUS_API_BASE_URL", "CAMPUS_MOCK_LATENCY_MS", "CAMPUS_LOG"]),
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("CAMPUS_API__BASE_URL"));
    }

    #[test]
    fn warns_when_base_url_is_set_for_mock_backend() {
        let warnings = collect_unconfigured_warnings(
            &CampusConfig::default(),
            env(&["CAMPUS_API__BASE_URL"]),
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("CAMPUS_API__BACKEND=rest"));
    }

    #[test]
    fn silent_for_well_formed_rest_setup() {
        let config = CampusConfig {
            api: ApiConfig {
                backend: Backend::Rest,
                ..ApiConfig::default()
            },
            ..CampusConfig::default()
        };
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&["CAMPUS_API__BASE_URL", "CAMPUS_API__BACKEND", "CAMPUS_SESSION__PATH"]),
        );
        assert!(warnings.is_empty());
    }
}
