//! Program interface description emitted next to compiled predicates.
//!
//! The ABI describes the layout of the data a predicate expects as its
//! input when evaluated. The runner only needs enough of it to encode
//! arguments for the predicate's `main` function, everything else in
//! the document is carried along untouched.

use {
  crate::Address,
  serde::{Deserialize, Serialize},
  serde_json::Value,
  thiserror::Error,
};

const WORD_SIZE: usize = 8;

#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed ABI document: {0}")]
  Json(#[from] serde_json::Error),

  #[error("ABI has no `main` function")]
  MissingMain,

  #[error("ABI references undeclared type id {0}")]
  UnknownType(usize),

  #[error("predicate expects {expected} arguments, {got} supplied")]
  ArityMismatch { expected: usize, got: usize },

  #[error("argument {index} should be `{expected}`, got `{got}`")]
  TypeMismatch {
    index: usize,
    expected: String,
    got: &'static str,
  },

  #[error("argument type `{0}` is not supported for predicate data")]
  UnsupportedType(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Abi {
  pub types: Vec<TypeDeclaration>,
  pub functions: Vec<AbiFunction>,
  #[serde(default)]
  pub logged_types: Vec<Value>,
  #[serde(default)]
  pub messages_types: Vec<Value>,
  #[serde(default)]
  pub configurables: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDeclaration {
  pub type_id: usize,
  #[serde(rename = "type")]
  pub type_field: String,
  #[serde(default)]
  pub components: Option<Vec<FunctionInput>>,
  #[serde(default)]
  pub type_parameters: Option<Vec<usize>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInput {
  pub name: String,
  #[serde(rename = "type")]
  pub type_id: usize,
  #[serde(default)]
  pub type_arguments: Option<Vec<FunctionInput>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbiFunction {
  pub name: String,
  pub inputs: Vec<FunctionInput>,
  pub output: FunctionInput,
  #[serde(default)]
  pub attributes: Option<Vec<Value>>,
}

/// A single argument value passed to a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
  B256([u8; 32]),
  U8(u8),
  U16(u16),
  U32(u32),
  U64(u64),
  Bool(bool),
}

impl Token {
  pub fn type_name(&self) -> &'static str {
    match self {
      Token::B256(_) => "b256",
      Token::U8(_) => "u8",
      Token::U16(_) => "u16",
      Token::U32(_) => "u32",
      Token::U64(_) => "u64",
      Token::Bool(_) => "bool",
    }
  }
}

impl From<Address> for Token {
  fn from(addr: Address) -> Self {
    Token::B256(addr.to_bytes())
  }
}

impl Abi {
  pub fn from_json(text: &str) -> Result<Self, Error> {
    Ok(serde_json::from_str(text)?)
  }

  /// The predicate entrypoint.
  pub fn main(&self) -> Result<&AbiFunction, Error> {
    self
      .functions
      .iter()
      .find(|f| f.name == "main")
      .ok_or(Error::MissingMain)
  }

  pub fn type_name(&self, type_id: usize) -> Result<&str, Error> {
    self
      .types
      .iter()
      .find(|t| t.type_id == type_id)
      .map(|t| t.type_field.as_str())
      .ok_or(Error::UnknownType(type_id))
  }

  pub fn main_input_types(&self) -> Result<Vec<&str>, Error> {
    self
      .main()?
      .inputs
      .iter()
      .map(|input| self.type_name(input.type_id))
      .collect()
  }

  /// Encodes arguments of `main` into predicate data.
  ///
  /// Scalars occupy one big-endian word each, `b256` values are
  /// written as their 32 raw bytes.
  pub fn encode_main_args(&self, args: &[Token]) -> Result<Vec<u8>, Error> {
    let types = self.main_input_types()?;
    if types.len() != args.len() {
      return Err(Error::ArityMismatch {
        expected: types.len(),
        got: args.len(),
      });
    }

    let mut output = Vec::with_capacity(args.len() * 32);
    for (index, (expected, token)) in types.iter().zip(args).enumerate() {
      let word = match (*expected, token) {
        ("b256", Token::B256(bytes)) => {
          output.extend_from_slice(bytes);
          continue;
        }
        ("u8", Token::U8(v)) => *v as u64,
        ("u16", Token::U16(v)) => *v as u64,
        ("u32", Token::U32(v)) => *v as u64,
        ("u64", Token::U64(v)) => *v,
        ("bool", Token::Bool(v)) => *v as u64,
        ("b256" | "u8" | "u16" | "u32" | "u64" | "bool", _) => {
          return Err(Error::TypeMismatch {
            index,
            expected: expected.to_string(),
            got: token.type_name(),
          })
        }
        (other, _) => return Err(Error::UnsupportedType(other.to_string())),
      };
      output.extend_from_slice(&word.to_be_bytes());
    }

    debug_assert_eq!(output.len() % WORD_SIZE, 0);
    Ok(output)
  }
}
