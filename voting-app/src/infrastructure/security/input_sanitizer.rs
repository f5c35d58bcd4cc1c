use voting_errors::AppError;

const MAX_CANDIDATE_NAME_LENGTH: usize = 100;
const MAX_EMAIL_LENGTH: usize = 254;
const MAX_DISPLAY_NAME_LENGTH: usize = 80;
const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_PASSWORD_LENGTH: usize = 128;

pub const EMPTY_CANDIDATE_MESSAGE: &str = "Please enter a name first!";

pub struct InputSanitizer;

impl InputSanitizer {
    /// Trims and strips control characters. An empty result never reaches the API.
    pub fn validate_candidate_name(name: &str) -> Result<String, AppError> {
        let cleaned = Self::strip_control(name);
        let cleaned = cleaned.trim();

        if cleaned.is_empty() {
            return Err(AppError::Validation(EMPTY_CANDIDATE_MESSAGE.to_string()));
        }

        if cleaned.chars().count() > MAX_CANDIDATE_NAME_LENGTH {
            tracing::warn!("Candidate name too long ({} chars)", cleaned.chars().count());
            return Err(AppError::Validation(format!(
                "Candidate name must be at most {MAX_CANDIDATE_NAME_LENGTH} characters"
            )));
        }

        Ok(cleaned.to_string())
    }

    pub fn validate_email(email: &str) -> Result<String, AppError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(AppError::Validation("Email is required".to_string()));
        }

        if email.len() > MAX_EMAIL_LENGTH {
            return Err(AppError::Validation("Email is too long".to_string()));
        }

        let re = regex_lite::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .map_err(|e| AppError::Internal(e.to_string()))?;
        if !re.is_match(email) {
            return Err(AppError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }

        Ok(email.to_string())
    }

    /// Login only checks presence; the server owns the real policy.
    pub fn validate_login_password(password: &str) -> Result<(), AppError> {
        if password.is_empty() {
            return Err(AppError::Validation("Password is required".to_string()));
        }
        if password.len() > MAX_PASSWORD_LENGTH {
            return Err(AppError::Validation("Password is too long".to_string()));
        }
        Ok(())
    }

    pub fn validate_new_password(password: &str) -> Result<(), AppError> {
        Self::validate_login_password(password)?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        Ok(())
    }

    pub fn validate_display_name(name: &str) -> Result<String, AppError> {
        let cleaned = Self::strip_control(name);
        let cleaned = cleaned.trim();

        if cleaned.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }

        if cleaned.chars().count() > MAX_DISPLAY_NAME_LENGTH {
            return Err(AppError::Validation("Name is too long".to_string()));
        }

        Ok(cleaned.to_string())
    }

    fn strip_control(input: &str) -> String {
        input.chars().filter(|c| !c.is_control()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_candidate_is_blocked() {
        for name in ["", "   ", "\t\n", "\u{7}"] {
            assert_eq!(
                InputSanitizer::validate_candidate_name(name),
                Err(AppError::Validation(EMPTY_CANDIDATE_MESSAGE.to_string()))
            );
        }
    }

    #[test]
    fn test_candidate_is_trimmed_and_cleaned() {
        assert_eq!(
            InputSanitizer::validate_candidate_name("  Mg\u{0}Mg  ").unwrap(),
            "MgMg"
        );
        assert_eq!(
            InputSanitizer::validate_candidate_name("Daw Aung San").unwrap(),
            "Daw Aung San"
        );
    }

    #[test]
    fn test_candidate_length_limit() {
        assert!(InputSanitizer::validate_candidate_name(&"a".repeat(100)).is_ok());
        assert!(InputSanitizer::validate_candidate_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_email_validation() {
        assert_eq!(
            InputSanitizer::validate_email(" su@example.com ").unwrap(),
            "su@example.com"
        );
        assert!(InputSanitizer::validate_email("").is_err());
        assert!(InputSanitizer::validate_email("su@").is_err());
        assert!(InputSanitizer::validate_email("su@localhost").is_err());
        assert!(InputSanitizer::validate_email("s u@example.com").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(InputSanitizer::validate_login_password("x").is_ok());
        assert!(InputSanitizer::validate_login_password("").is_err());
        assert!(InputSanitizer::validate_new_password("12345").is_err());
        assert!(InputSanitizer::validate_new_password("123456").is_ok());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(InputSanitizer::validate_display_name(" Nilar ").unwrap(), "Nilar");
        assert!(InputSanitizer::validate_display_name("  ").is_err());
    }
}
