//! Person name rules shared by generated contacts.
//!
//! Generated names come from a broad locale dictionary; only names made of
//! letters, spaces, hyphens and apostrophes are kept so that derived email
//! addresses stay readable.

/// Maximum allowed length for a single name part.
pub const PERSON_NAME_MAX: usize = 24;

/// Validates a first or last name.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_person_name;
///
/// assert!(is_valid_person_name("Okello"));
/// assert!(is_valid_person_name("O'Brien"));
/// assert!(!is_valid_person_name(""));
/// assert!(!is_valid_person_name("R2D2"));
/// ```
#[must_use]
pub fn is_valid_person_name(name: &str) -> bool {
    let length = name.chars().count();
    if length == 0 || length > PERSON_NAME_MAX {
        return false;
    }
    if name.trim() != name {
        return false;
    }
    name.chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'')
}

/// Derive an email address from a contact's names and identifier.
///
/// The identifier keeps addresses unique when two contacts share a name.
///
/// # Examples
///
/// ```
/// use example_data::email_for;
///
/// assert_eq!(email_for("Mary Jane", "O'Neil", 7), "maryjane.oneil7@example.org");
/// ```
#[must_use]
pub fn email_for(first_name: &str, last_name: &str, id: u32) -> String {
    let local = |part: &str| -> String {
        part.chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    };
    format!("{}.{}{id}@example.org", local(first_name), local(last_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Ada", true)]
    #[case("Mary-Kate", true)]
    #[case(" Ada", false)]
    #[case("abcdefghijklmnopqrstuvwxy", false)]
    #[case("user_1", false)]
    fn validates_person_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_valid_person_name(name), expected);
    }

    #[test]
    fn email_strips_non_alphanumerics() {
        assert_eq!(email_for("Jean-Paul", "Habimana", 12), "jeanpaul.habimana12@example.org");
    }
}
