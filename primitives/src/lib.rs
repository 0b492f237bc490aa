mod abi;
mod address;
mod bytecode;
mod key;
mod transaction;
mod units;

pub use {
  abi::{
    Abi,
    AbiFunction,
    Error as AbiError,
    FunctionInput,
    Token,
    TypeDeclaration,
  },
  address::{Address, AssetId, Error as AddressError},
  bytecode::Bytecode,
  key::{Error as KeyError, PrivateKey},
  transaction::TxId,
  units::{format_units, BASE_ASSET_DECIMALS},
};
