use thiserror::Error;

/// Failures recorded on an exchange.
///
/// Processors return these from `process`; routing infrastructure stores
/// them in the exchange's failure slot instead of propagating them.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("processing failed: {0}")]
    Processing(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ExchangeError::Processing("bad input".into());
        assert_eq!(err.to_string(), "processing failed: bad input");
    }

    #[test]
    fn wraps_arbitrary_errors() {
        fn parse(raw: &str) -> Result<i64, ExchangeError> {
            let n: i64 = raw.parse().map_err(anyhow::Error::from)?;
            Ok(n)
        }

        assert_eq!(parse("42").unwrap(), 42);
        assert!(matches!(parse("forty-two"), Err(ExchangeError::Other(_))));
    }
}
