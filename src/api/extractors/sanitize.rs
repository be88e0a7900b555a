//! Markup stripping for free-text request fields.

use std::collections::HashSet;

use crate::domain::{CreateUser, UpdateUser};

/// Request bodies whose text fields are cleaned before validation.
///
/// Passwords are left alone: they are hashed, never rendered.
pub trait Sanitize {
    fn sanitize(&mut self);
}

/// Drop every HTML tag; `<script>` and `<style>` lose their content too.
pub fn strip_html(text: &str) -> String {
    ammonia::Builder::default()
        .tags(HashSet::new())
        .clean(text)
        .to_string()
}

impl Sanitize for CreateUser {
    fn sanitize(&mut self) {
        self.name = strip_html(&self.name);
        self.email = strip_html(&self.email);
    }
}

impl Sanitize for UpdateUser {
    fn sanitize(&mut self) {
        self.name = self.name.as_deref().map(strip_html);
        self.email = self.email.as_deref().map(strip_html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_removed_with_its_content() {
        assert_eq!(strip_html("Bob<script>alert('x')</script>"), "Bob");
    }

    #[test]
    fn test_formatting_tags_keep_their_text() {
        assert_eq!(strip_html("<b>Eve</b> <i>Smith</i>"), "Eve Smith");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(strip_html("Jean-Luc O'Brien"), "Jean-Luc O'Brien");
        assert_eq!(strip_html("alice@example.com"), "alice@example.com");
    }

    #[test]
    fn test_create_user_password_is_not_sanitized() {
        let mut input = CreateUser {
            name: "<img src=x onerror=alert(1)>Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "<b>pw</b>123".to_string(),
        };

        input.sanitize();

        assert_eq!(input.name, "Alice");
        assert_eq!(input.password, "<b>pw</b>123");
    }

    #[test]
    fn test_update_user_absent_fields_stay_absent() {
        let mut input = UpdateUser {
            name: Some("<script>x</script>Zoe".to_string()),
            ..UpdateUser::default()
        };

        input.sanitize();

        assert_eq!(input.name.as_deref(), Some("Zoe"));
        assert!(input.email.is_none());
        assert!(input.password.is_none());
    }
}
