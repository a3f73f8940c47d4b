use entigen::{NamingStrategy, capital_first, strip_is_prefix, strip_prefixes};

#[test]
fn test_no_change_is_identity() {
    assert_eq!(NamingStrategy::NoChange.apply("USER_ID"), "USER_ID");
    assert_eq!(NamingStrategy::NoChange.apply("userName"), "userName");
}

#[test]
fn test_snake_case_normalizes() {
    assert_eq!(NamingStrategy::SnakeCase.apply("USER_ID"), "user_id");
    assert_eq!(NamingStrategy::SnakeCase.apply("userName"), "user_name");
    // Already-snake names pass through unchanged.
    assert_eq!(NamingStrategy::SnakeCase.apply("user_id"), "user_id");
}

#[test]
fn test_capital_first() {
    assert_eq!(capital_first("user"), "User");
    assert_eq!(capital_first("User"), "User");
    assert_eq!(capital_first(""), "");
}

#[test]
fn test_strip_prefixes_case_insensitive() {
    let prefixes = vec!["tbl_".to_string(), "t_".to_string()];
    assert_eq!(strip_prefixes("tbl_user", &prefixes), "user");
    assert_eq!(strip_prefixes("TBL_user", &prefixes), "user");
    assert_eq!(strip_prefixes("t_order", &prefixes), "order");
    assert_eq!(strip_prefixes("user", &prefixes), "user");
}

#[test]
fn test_strip_prefixes_first_match_wins() {
    let prefixes = vec!["t_".to_string(), "t_tbl_".to_string()];
    assert_eq!(strip_prefixes("t_tbl_user", &prefixes), "tbl_user");
}

#[test]
fn test_strip_is_prefix() {
    assert_eq!(strip_is_prefix("is_active"), "active");
    assert_eq!(strip_is_prefix("IS_deleted"), "deleted");
    assert_eq!(strip_is_prefix("island"), "island");
    assert_eq!(strip_is_prefix("is"), "is");
}

#[test]
fn test_strategy_parse_and_display() {
    assert_eq!(
        "snake_case".parse::<NamingStrategy>().unwrap(),
        NamingStrategy::SnakeCase
    );
    assert_eq!(NamingStrategy::NoChange.to_string(), "no_change");
}

#[test]
fn test_strategy_serde_round_trip() {
    let json = serde_json::to_string(&NamingStrategy::SnakeCase).unwrap();
    assert_eq!(json, "\"snake_case\"");
    let strategy: NamingStrategy = serde_json::from_str(&json).unwrap();
    assert_eq!(strategy, NamingStrategy::SnakeCase);
}
