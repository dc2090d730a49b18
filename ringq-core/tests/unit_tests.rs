//! Unit tests for ringq-core

use proptest::prelude::*;

use ringq_core::{
    config::{LogFormat, LogLevel},
    utils::{copy_nul_terminated, terminated_len},
    Config, Element, Error, Metrics, QueueConfig,
};

mod element_tests {
    use super::*;

    #[test]
    fn test_element_owns_its_copy() {
        let mut source = String::from("hedgehog");
        let element = Element::new(&source).unwrap();
        source.clear();
        assert_eq!(element.value(), "hedgehog");
        assert_eq!(element.to_string(), "hedgehog");
        assert_eq!(element.into_value(), "hedgehog");
    }

    #[test]
    fn test_element_as_ref() {
        let element = Element::new("owl").unwrap();
        let text: &str = element.as_ref();
        assert_eq!(text, "owl");
    }

    #[test]
    fn test_leading_nul_gives_empty_element() {
        let element = Element::new("\0hidden").unwrap();
        assert!(element.is_empty());
        assert_eq!(element.len(), 0);
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.queue.initial_capacity, 16);
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_full_document() {
        let json = r#"{
            "queue": { "initial_capacity": 64, "max_elements": 1000 },
            "logging": { "level": "Trace", "format": "Json" }
        }"#;
        let config = Config::from_json_str(json).unwrap();
        assert_eq!(config.queue.initial_capacity, 64);
        assert_eq!(config.queue.max_elements, Some(1000));
        assert_eq!(config.logging.level, LogLevel::Trace);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(tracing::Level::from(config.logging.level), tracing::Level::TRACE);
    }

    #[test]
    fn test_serialized_config_parses_back() {
        let config = Config {
            queue: QueueConfig {
                initial_capacity: 8,
                max_elements: Some(2),
            },
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_document_is_config_error() {
        let err = Config::from_json_str("{ queue: ").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("parsing ringq configuration"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_zero_element_limit_rejected() {
        let err = Config::from_json_str(r#"{ "queue": { "initial_capacity": 4, "max_elements": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let cases = [
            (Error::Allocation { requested: 8 }, "ALLOCATION_FAILED", true),
            (
                Error::ResourceExhausted {
                    resource: "queue elements".into(),
                },
                "RESOURCE_EXHAUSTED",
                true,
            ),
            (
                Error::RingCorruption {
                    details: "prev link".into(),
                },
                "RING_CORRUPTION",
                false,
            ),
            (
                Error::Configuration {
                    message: "bad".into(),
                },
                "CONFIG_ERROR",
                false,
            ),
        ];
        for (err, code, recoverable) in cases {
            assert_eq!(err.error_code(), code);
            assert_eq!(err.is_recoverable(), recoverable);
        }
    }

    #[test]
    fn test_allocation_message() {
        let err = Error::Allocation { requested: 32 };
        assert_eq!(err.to_string(), "Allocation of 32 bytes failed");
    }
}

mod metrics_tests {
    use super::*;

    #[test]
    fn test_snapshot_counts_every_kind() {
        let metrics = Metrics::new();
        metrics.record_insert();
        metrics.record_removal();
        metrics.record_allocation_failure();
        metrics.record_structural_op();
        metrics.record_sort();
        metrics.record_merge();
        metrics.record_releases(2);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.inserts, 1);
        assert_eq!(snapshot.removals, 1);
        assert_eq!(snapshot.allocation_failures, 1);
        assert_eq!(snapshot.structural_ops, 1);
        assert_eq!(snapshot.sorts, 1);
        assert_eq!(snapshot.merges, 1);
        assert_eq!(snapshot.releases, 2);
    }
}

proptest! {
    #[test]
    fn test_copy_never_overflows(text in "[ -~]{0,32}", size in 0usize..40) {
        let mut buf = vec![0xffu8; size];
        let copied = copy_nul_terminated(text.as_bytes(), &mut buf);

        prop_assert!(copied <= text.len());
        if size > 0 {
            prop_assert_eq!(copied, text.len().min(size - 1));
            prop_assert_eq!(&buf[..copied], &text.as_bytes()[..copied]);
            prop_assert!(buf[copied..].iter().all(|&b| b == 0));
        } else {
            prop_assert_eq!(copied, 0);
        }
    }

    #[test]
    fn test_element_keeps_text_before_nul(prefix in "[a-z]{0,10}", suffix in "[a-z]{0,10}") {
        let text = format!("{}\0{}", prefix, suffix);
        prop_assert_eq!(terminated_len(&text), prefix.len());
        let element = Element::new(&text).unwrap();
        prop_assert_eq!(element.value(), prefix.as_str());
    }
}
