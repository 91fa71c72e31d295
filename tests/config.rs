use resume_tailor::{ConfigError, Tailor, TailorConfig};
use resume_tailor::selection::KeywordScorer;

#[test]
fn v0_defaults() {
    let config = TailorConfig::default();
    assert_eq!(config, TailorConfig::v0());
    assert_eq!(config.max_bullets_per_entry, 4);
    assert_eq!(config.max_total_bullets, None);
    assert_eq!(config.min_token_len, 2);
    assert_eq!(config.phrase_boost, 2.0);
    assert_eq!(config.proper_noun_boost, 1.5);
    assert_eq!(config.summary_skill_count, 3);
    assert_eq!(config.fallback_title, "Professional");
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let config: TailorConfig =
        serde_json::from_str(r#"{"max_bullets_per_entry": 2, "max_total_bullets": 6}"#).unwrap();
    assert_eq!(config.max_bullets_per_entry, 2);
    assert_eq!(config.max_total_bullets, Some(6));
    assert_eq!(config.fallback_title, "Professional");
}

#[test]
fn invalid_configs_are_rejected() {
    let cases = [
        (
            TailorConfig {
                max_bullets_per_entry: 0,
                ..TailorConfig::v0()
            },
            ConfigError::ZeroBulletCap,
        ),
        (
            TailorConfig {
                min_token_len: 0,
                ..TailorConfig::v0()
            },
            ConfigError::ZeroTokenLength,
        ),
        (
            TailorConfig {
                phrase_boost: 0.5,
                ..TailorConfig::v0()
            },
            ConfigError::InvalidBoost {
                name: "phrase_boost",
                value: 0.5,
            },
        ),
        (
            TailorConfig {
                fallback_title: " ".into(),
                ..TailorConfig::v0()
            },
            ConfigError::BlankFallbackTitle,
        ),
    ];

    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected.clone()));
        assert_eq!(Tailor::new(KeywordScorer, config).err(), Some(expected));
    }
}

#[test]
fn non_finite_boost_is_rejected() {
    let config = TailorConfig {
        proper_noun_boost: f64::INFINITY,
        ..TailorConfig::v0()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBoost {
            name: "proper_noun_boost",
            ..
        })
    ));
}

#[test]
fn version_tracks_every_field() {
    let base = TailorConfig::v0();
    assert_eq!(base.version(), TailorConfig::v0().version());
    assert!(base.version().as_str().starts_with("sha256:"));

    let variants = [
        TailorConfig {
            max_total_bullets: Some(10),
            ..TailorConfig::v0()
        },
        TailorConfig {
            extra_phrases: vec!["feature flags".into()],
            ..TailorConfig::v0()
        },
        TailorConfig {
            fallback_title: "Engineer".into(),
            ..TailorConfig::v0()
        },
    ];
    for variant in variants {
        assert_ne!(variant.version(), base.version());
    }
}
