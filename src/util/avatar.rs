//! Avatar placeholder text.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

/// Up to two uppercase initials from a display name; `?` when nothing usable.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() { "?".to_owned() } else { letters }
}
