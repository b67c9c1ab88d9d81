//! Tracing subscriber setup.

use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{Config, LogFormat};

/// Directive used when `RUST_LOG` cannot be parsed.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global subscriber writing to stdout. A second call is a no-op.
pub fn init(config: &Config) {
    let result = tracing_subscriber::registry()
        .with(env_filter(&config.log_level))
        .with(fmt_layer(config.log_format, std::io::stdout))
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Parses `directive`, falling back to [`DEFAULT_DIRECTIVE`] when it is invalid.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("invalid log directive {directive:?} ({err}), using {DEFAULT_DIRECTIVE:?}");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    })
}

/// Formatting layer for `format`, writing through `writer`.
pub fn fmt_layer<S, W>(format: LogFormat, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
        LogFormat::Pretty => fmt::layer().with_writer(writer).boxed(),
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(format: LogFormat) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(fmt_layer(format, captured.clone()));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(port = 8000, "listening");
        });
        captured.contents()
    }

    #[test]
    fn invalid_directive_falls_back_to_info() {
        let filter = env_filter("ai_service=loudest");
        assert_eq!(filter.to_string(), EnvFilter::new(DEFAULT_DIRECTIVE).to_string());
    }

    #[test]
    fn valid_directive_is_kept() {
        let filter = env_filter("ai_service=debug");
        assert!(filter.to_string().eq_ignore_ascii_case("ai_service=debug"));
    }

    #[test]
    fn json_format_writes_one_object_per_event() {
        let output = capture(LogFormat::Json);
        let line: serde_json::Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
        assert_eq!(line["level"], "INFO");
        assert_eq!(line["fields"]["message"], "listening");
        assert_eq!(line["fields"]["port"], 8000);
    }

    #[test]
    fn pretty_format_is_not_json() {
        let output = capture(LogFormat::Pretty);
        assert!(output.contains("listening"));
        assert!(serde_json::from_str::<serde_json::Value>(output.trim()).is_err());
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(&Config::default());
        init(&Config {
            log_format: LogFormat::Json,
            ..Config::default()
        });
    }
}
