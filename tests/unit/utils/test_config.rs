use instagram_client::utils::config::{get_env_non_empty, get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("IGC_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("IGC_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("IGC_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("IGC_MISSING_VAR");
        let result: String = get_env_or_default("IGC_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("IGC_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("IGC_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("IGC_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("IGC_TEST_VAR_OPTION", "10");
        let result: Option<u32> = get_env_or_none("IGC_TEST_VAR_OPTION");
        assert_eq!(result, Some(10));
        env::remove_var("IGC_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_or_none_with_invalid_parse() {
    unsafe {
        env::set_var("IGC_TEST_VAR_INVALID_OPTION", "ten");
        let result: Option<u32> = get_env_or_none("IGC_TEST_VAR_INVALID_OPTION");
        assert_eq!(result, None);
        env::remove_var("IGC_TEST_VAR_INVALID_OPTION");
    }
}

#[test]
fn test_get_env_non_empty_treats_blank_as_unset() {
    unsafe {
        env::set_var("IGC_TEST_VAR_BLANK", "   ");
        assert_eq!(get_env_non_empty("IGC_TEST_VAR_BLANK"), None);
        env::set_var("IGC_TEST_VAR_BLANK", " token ");
        assert_eq!(get_env_non_empty("IGC_TEST_VAR_BLANK"), Some("token".to_string()));
        env::remove_var("IGC_TEST_VAR_BLANK");
    }
}
