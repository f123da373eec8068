use crate::batch::process_lines;

/// Placeholder for lines that cannot be reduced to a ten-digit local
/// number, literally "invalid number".
pub const INVALID_NUMBER: &str = "เบอร์ไม่ถูกต้อง";

const LOCAL_LEN: usize = 10;

/// Rewrites one line into a canonical ten-digit local number, the empty
/// string for a line with no digits, or [`INVALID_NUMBER`].
///
/// The rewrite chain is ordered: country-code substitution first, then the
/// last-ten adoption, then a single doubled-zero trim. The ordering decides
/// the outcome for 11-13 digit inputs, so it must not be rearranged.
pub fn normalize_phone_line(line: &str) -> String {
    let mut digits: String = line.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }

    // Country code to trunk prefix, first match wins.
    if let Some(rest) = digits.strip_prefix("66") {
        digits = format!("0{}", rest);
    } else if let Some(rest) = digits.strip_prefix("60") {
        digits = format!("0{}", rest);
    } else if !digits.starts_with('0') {
        digits.insert(0, '0');
    }

    // Overlong input: adopt the last ten digits when they look local.
    if digits.len() > LOCAL_LEN {
        let last_ten = &digits[digits.len() - LOCAL_LEN..];
        if last_ten.starts_with('0') {
            digits = last_ten.to_string();
        }
    }

    // One corrective trim for a doubled leading zero, not a loop.
    if digits.len() > LOCAL_LEN && digits.starts_with("00") {
        digits.remove(0);
    }

    if digits.len() != LOCAL_LEN {
        return INVALID_NUMBER.to_string();
    }

    digits
}

/// Batch entry point: normalizes up to the line cap, drops lines that had
/// no digits at all, keeps invalid-number placeholders, joins with
/// newlines in input order.
pub fn normalize_phones(text: &str) -> String {
    process_lines(text, normalize_phone_line)
        .into_iter()
        .filter(|result| !result.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
