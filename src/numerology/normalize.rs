//! Vietnamese name normalization
//!
//! Maps accented Vietnamese text onto the 26-letter Latin alphabet used by
//! the Pythagorean table. The output holds only `A-Z` and single spaces.

/// Fold one uppercase Vietnamese letter onto its Latin base letter.
///
/// Characters outside the table are returned unchanged.
fn fold_vietnamese(c: char) -> char {
    match c {
        'À' | 'Á' | 'Ả' | 'Ã' | 'Ạ' => 'A',
        'Ă' | 'Ằ' | 'Ắ' | 'Ẳ' | 'Ẵ' | 'Ặ' => 'A',
        'Â' | 'Ầ' | 'Ấ' | 'Ẩ' | 'Ẫ' | 'Ậ' => 'A',
        'Đ' => 'D',
        'È' | 'É' | 'Ẻ' | 'Ẽ' | 'Ẹ' => 'E',
        'Ê' | 'Ề' | 'Ế' | 'Ể' | 'Ễ' | 'Ệ' => 'E',
        'Ì' | 'Í' | 'Ỉ' | 'Ĩ' | 'Ị' => 'I',
        'Ò' | 'Ó' | 'Ỏ' | 'Õ' | 'Ọ' => 'O',
        'Ô' | 'Ồ' | 'Ố' | 'Ổ' | 'Ỗ' | 'Ộ' => 'O',
        'Ơ' | 'Ờ' | 'Ớ' | 'Ở' | 'Ỡ' | 'Ợ' => 'O',
        'Ù' | 'Ú' | 'Ủ' | 'Ũ' | 'Ụ' => 'U',
        'Ư' | 'Ừ' | 'Ứ' | 'Ử' | 'Ữ' | 'Ự' => 'U',
        'Ỳ' | 'Ý' | 'Ỷ' | 'Ỹ' | 'Ỵ' => 'Y',
        other => other,
    }
}

/// Normalize a display name into uppercase `A-Z` words separated by single spaces.
///
/// Empty or all-punctuation input yields an empty string.
///
/// # Examples
///
/// ```
/// use name_forge::numerology::normalize_vietnamese;
///
/// assert_eq!(normalize_vietnamese("Nguyễn Văn An"), "NGUYEN VAN AN");
/// assert_eq!(normalize_vietnamese("  đỗ   thị-Hằng "), "DO THIHANG");
/// ```
pub fn normalize_vietnamese(name: &str) -> String {
    let folded: String = name
        .to_uppercase()
        .chars()
        .map(fold_vietnamese)
        .filter_map(|c| {
            if c.is_ascii_uppercase() {
                Some(c)
            } else if c.is_whitespace() {
                Some(' ')
            } else {
                None
            }
        })
        .collect();

    folded.split_whitespace().collect::<Vec<&str>>().join(" ")
}
