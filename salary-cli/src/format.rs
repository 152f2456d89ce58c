use rust_decimal::Decimal;

/// Display suffix for a currency code; KRW amounts read as "1,000원".
pub fn currency_suffix(currency: &str) -> String {
    match currency {
        "KRW" => "원".to_string(),
        other => format!(" {other}"),
    }
}

/// Inserts comma thousands separators into the integer part of `value`.
///
/// Trailing fractional zeros are dropped; a remaining fraction is kept as is.
pub fn group_thousands(value: Decimal) -> String {
    let text = value.normalize().to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats an amount with separators and the currency suffix.
pub fn format_amount(
    value: Decimal,
    currency: &str,
) -> String {
    format!("{}{}", group_thousands(value), currency_suffix(currency))
}
