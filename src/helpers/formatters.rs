pub fn format_distance(distance: f64) -> String {
    if distance < 0.1 {
        return format!("{} m", (distance * 1000.0).round() as i64);
    }
    format!("{:.1} km", round_half_up(distance))
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", round_half_up(rating))
}

// Ties go up (4.25 -> 4.3); `{:.1}` alone would round them to even.
fn round_half_up(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn format_price_level(price_level: &str) -> String {
    price_level.to_string()
}

/// `4155551234` becomes `(415) 555-1234`. Anything without ten consecutive digits is returned as-is.
pub fn format_phone_number(phone_number: &str) -> String {
    let bytes = phone_number.as_bytes();
    let start = (0..bytes.len()).find(|&i| {
        bytes.len() - i >= 10 && bytes[i..i + 10].iter().all(u8::is_ascii_digit)
    });

    match start {
        Some(i) => format!(
            "{}({}) {}-{}{}",
            &phone_number[..i],
            &phone_number[i..i + 3],
            &phone_number[i + 3..i + 6],
            &phone_number[i + 6..i + 10],
            &phone_number[i + 10..],
        ),
        None => phone_number.to_string(),
    }
}
