//! Line-delimited JSON request loop
//!
//! One request object per input line, one response object per output line.
//! Bad lines get an error response; only I/O failure ends the loop early.

use std::io::{BufRead, Write};
use tracing::{debug, info, warn};
use traveler::{ConversionRequest, Converter, ConvertError, RateProvider, Response};

/// Answer a single input line
pub fn handle_line<P: RateProvider>(converter: &Converter<P>, line: &str) -> Response {
    let request: ConversionRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "rejected request line");
            return Response::failure(ConvertError::invalid_input(format!("bad request: {}", e)).report());
        }
    };
    Response::from(converter.convert(&request))
}

/// Serve until EOF; returns the number of responses written
pub fn run<P, R, W>(converter: &Converter<P>, reader: R, mut writer: W) -> std::io::Result<usize>
where
    P: RateProvider,
    R: BufRead,
    W: Write,
{
    let mut answered = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(bytes = line.len(), "request received");
        let response = handle_line(converter, line);
        let json = serde_json::to_string(&response)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;
        answered += 1;
    }

    info!(answered, "input closed");
    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use traveler::{CurrencyCode, ExchangeRateQuote, FetchError};

    type QuoteFn = fn(&CurrencyCode) -> Result<ExchangeRateQuote, FetchError>;

    fn offline(_: &CurrencyCode) -> Result<ExchangeRateQuote, FetchError> {
        Err(FetchError::NotConfigured("offline".to_string()))
    }

    fn converter() -> Converter<QuoteFn> {
        Converter::new(offline as QuoteFn)
    }

    fn lines(output: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8(output.to_vec()).unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_answers_each_request() {
        let input = concat!(
            r#"{"category": "length", "value": 10, "from": "in", "to": "cm"}"#, "\n",
            "\n",
            r#"{"category": "temperature", "value": 212, "from": "F", "to": "C"}"#, "\n",
        );
        let mut output = Vec::new();
        let answered = run(&converter(), input.as_bytes(), &mut output).unwrap();
        assert_eq!(answered, 2);

        let responses = lines(&output);
        assert_eq!(responses[0]["conversion"]["display"], "10 in = 25.4000 cm");
        assert_eq!(responses[1]["conversion"]["result"], 100.0);
    }

    #[test]
    fn test_bad_line_gets_error_response() {
        let input = "not json\n{\"category\": \"length\", \"value\": -1, \"from\": \"m\", \"to\": \"ft\"}\n";
        let mut output = Vec::new();
        run(&converter(), input.as_bytes(), &mut output).unwrap();

        let responses = lines(&output);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["ok"], false);
        assert_eq!(responses[0]["error"]["code"], "INVALID_INPUT");
        assert_eq!(responses[1]["error"]["message"], "Invalid input: negative value not permitted");
    }

    #[test]
    fn test_currency_without_provider() {
        let response = handle_line(
            &converter(),
            r#"{"category": "currency", "amount": 5, "from": "usd", "to": "eur"}"#,
        );
        assert!(!response.ok);
        assert_eq!(response.error.unwrap().code, "UPSTREAM_UNAVAILABLE");
    }
}
