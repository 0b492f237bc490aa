use {
  predicate_primitives::{AbiError, TxId},
  serde::{Deserialize, Serialize},
  thiserror::Error,
};

/// One entry of the error list a network node attaches to a rejected
/// request. Every field is optional, nodes are not consistent about
/// what they fill in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkError {
  #[serde(default)]
  pub message: Option<String>,
}

impl NetworkError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: Some(message.into()),
    }
  }
}

/// Body of a rejected request as reported by the network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
  #[serde(default)]
  pub errors: Vec<NetworkError>,
}

impl ErrorResponse {
  /// Parses an error body that starts at the beginning of `text`,
  /// ignoring whatever follows it. Bodies without any error entries
  /// yield `None`.
  fn embedded_in(text: &str) -> Option<Self> {
    let mut stream =
      serde_json::Deserializer::from_str(text).into_iter::<Self>();
    match stream.next() {
      Some(Ok(body)) if !body.errors.is_empty() => Some(body),
      _ => None,
    }
  }

  /// Message of the first reported error, if it has a non-empty one.
  pub fn first_message(&self) -> Option<&str> {
    self
      .errors
      .first()
      .and_then(|e| e.message.as_deref())
      .filter(|m| !m.is_empty())
  }
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to connect to {url}: {reason}")]
  Connection { url: String, reason: String },

  #[error("no client backend available for provider {0}")]
  UnsupportedProvider(String),

  #[error("invalid private key: {0}")]
  InvalidKey(String),

  #[error("invalid predicate: {0}")]
  InvalidPredicate(String),

  #[error("predicate data encoding failed: {0}")]
  Abi(#[from] AbiError),

  #[error("{message}")]
  Response {
    message: String,
    response: Option<ErrorResponse>,
  },

  #[error("transaction {0} was dropped before reaching a final state")]
  Dropped(TxId),
}

impl Error {
  /// A request failure with no structured body.
  pub fn response(message: impl Into<String>) -> Self {
    Error::Response {
      message: message.into(),
      response: None,
    }
  }

  /// A request failure described only by text, as client libraries
  /// report them. If the text embeds the node's JSON error body, its
  /// error list is kept.
  pub fn from_text(text: impl Into<String>) -> Self {
    let text = text.into();
    let response = text
      .match_indices('{')
      .find_map(|(at, _)| ErrorResponse::embedded_in(&text[at..]));
    Error::Response {
      message: text,
      response,
    }
  }

  /// A request failure carrying the network's error list.
  pub fn rejected(
    message: impl Into<String>,
    errors: impl IntoIterator<Item = NetworkError>,
  ) -> Self {
    Error::Response {
      message: message.into(),
      response: Some(ErrorResponse {
        errors: errors.into_iter().collect(),
      }),
    }
  }

  pub fn error_response(&self) -> Option<&ErrorResponse> {
    match self {
      Error::Response { response, .. } => response.as_ref(),
      _ => None,
    }
  }

  /// The most specific description available: the first error message
  /// reported by the network, falling back to this error's own message.
  pub fn reason(&self) -> String {
    self
      .error_response()
      .and_then(ErrorResponse::first_message)
      .map(str::to_owned)
      .unwrap_or_else(|| self.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::{Error, ErrorResponse, NetworkError};

  #[test]
  fn reason_prefers_first_network_error() {
    let err = Error::rejected("request failed", [
      NetworkError::new("Predicate verification failed"),
      NetworkError::new("second"),
    ]);
    assert_eq!(err.reason(), "Predicate verification failed");
    assert_eq!(err.to_string(), "request failed");
  }

  #[test]
  fn reason_falls_back_to_generic_message() {
    assert_eq!(Error::response("timed out").reason(), "timed out");

    let empty_list = Error::rejected("request failed", Vec::new());
    assert_eq!(empty_list.reason(), "request failed");

    let blank_message =
      Error::rejected("request failed", [NetworkError::new("")]);
    assert_eq!(blank_message.reason(), "request failed");

    // only the first entry is consulted
    let first_without_message = Error::rejected("request failed", [
      NetworkError::default(),
      NetworkError::new("later"),
    ]);
    assert_eq!(first_without_message.reason(), "request failed");
  }

  #[test]
  fn lenient_error_body() {
    let body = ErrorResponse::embedded_in(
      r#"{ "errors": [{ "locations": [{ "line": 2 }] }, { "message": "x" }] }"#,
    )
    .unwrap();
    assert_eq!(body.errors.len(), 2);
    assert_eq!(body.first_message(), None);

    assert!(ErrorResponse::embedded_in(r#"{ "data": null }"#).is_none());
    assert!(ErrorResponse::embedded_in("not json").is_none());
  }

  #[test]
  fn error_list_recovered_from_text() {
    let err = Error::from_text(
      "Response errors; {\"errors\":[{\"message\":\"PredicateVerificationFailed\"\
       }],\"data\":null} (status 200)",
    );
    assert_eq!(err.reason(), "PredicateVerificationFailed");
    assert_eq!(err.error_response().map(|r| r.errors.len()), Some(1));

    // braces that are not an error body leave the text as the reason
    let err = Error::from_text("io error: {os error 111}");
    assert!(err.error_response().is_none());
    assert_eq!(err.reason(), "io error: {os error 111}");

    let err = Error::from_text("invalid args {\"data\": {}}");
    assert!(err.error_response().is_none());
  }
}
