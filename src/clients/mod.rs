//! Typed request methods on [`crate::OpenMeteo`], one module per endpoint family.
//!
//! Each module adds a builder method (`client.forecast().location(..).call()`)
//! that runs the shared request pipeline and decodes the body into its own
//! result type.

use crate::error::OpenMeteoError;
use crate::types::options::Options;

pub mod air_quality;
pub mod forecast;
pub mod historical;
pub mod satellite;
pub mod seasonal;

/// Options are mandatory for endpoints that need a date range or mode flag.
pub(crate) fn require_options(options: Option<&Options>) -> Result<&Options, OpenMeteoError> {
    options.ok_or_else(|| OpenMeteoError::invalid_input("options", "none"))
}

/// Copy of `options` with `defaults` filled in when `pick` selects an empty list.
pub(crate) fn with_default_metrics(
    options: Option<&Options>,
    pick: fn(&mut Options) -> &mut Vec<String>,
    defaults: &[&str],
) -> Options {
    let mut options = options.cloned().unwrap_or_default();
    let metrics = pick(&mut options);
    if metrics.is_empty() {
        *metrics = defaults.iter().map(|m| m.to_string()).collect();
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_require_options() {
        let err = require_options(None).expect_err("missing options should fail");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "invalid input: options = none");

        let options = Options::default();
        assert!(require_options(Some(&options)).is_ok());
    }

    #[test]
    fn test_defaults_only_fill_empty_lists() {
        let filled = with_default_metrics(None, |o| &mut o.satellite_metrics, &["a", "b"]);
        assert_eq!(filled.satellite_metrics, vec!["a", "b"]);

        let explicit = Options {
            satellite_metrics: vec!["infrared".into()],
            ..Default::default()
        };
        let kept = with_default_metrics(Some(&explicit), |o| &mut o.satellite_metrics, &["a"]);
        assert_eq!(kept.satellite_metrics, vec!["infrared"]);
    }
}
