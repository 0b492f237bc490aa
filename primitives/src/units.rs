/// Number of decimal places between the base asset's smallest
/// denomination and its display unit.
pub const BASE_ASSET_DECIMALS: u32 = 9;

/// Formats an amount expressed in the smallest denomination as a
/// decimal number of display units, dropping trailing zeros.
///
/// `format_units(300_000, 9)` yields `"0.0003"`.
pub fn format_units(amount: u64, decimals: u32) -> String {
  if decimals == 0 {
    return amount.to_string();
  }

  let scale = 10u128.pow(decimals);
  let amount = amount as u128;
  let whole = amount / scale;
  let fraction = amount % scale;

  if fraction == 0 {
    return whole.to_string();
  }

  let fraction = format!("{fraction:0width$}", width = decimals as usize);
  format!("{whole}.{}", fraction.trim_end_matches('0'))
}
