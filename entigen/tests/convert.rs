use entigen::{DefaultNameConvert, NameConvert, NamingStrategy, StrategyConfig};

fn snake_convert() -> DefaultNameConvert {
    let strategy = StrategyConfig::new()
        .add_table_prefixes(["tbl_"])
        .add_field_prefixes(["f_"]);
    DefaultNameConvert::new(strategy, NamingStrategy::SnakeCase, NamingStrategy::SnakeCase)
}

#[test]
fn test_entity_name_strips_prefix_and_camelizes() {
    let convert = snake_convert();
    assert_eq!(convert.entity_name("tbl_user_account"), "UserAccount");
    assert_eq!(convert.entity_name("user_account"), "UserAccount");
}

#[test]
fn test_entity_name_prefix_strip_is_case_insensitive() {
    let convert = snake_convert();
    assert_eq!(convert.entity_name("TBL_USER"), "User");
}

#[test]
fn test_entity_name_no_change_only_capitalizes() {
    let convert = DefaultNameConvert::new(
        StrategyConfig::new(),
        NamingStrategy::NoChange,
        NamingStrategy::NoChange,
    );
    assert_eq!(convert.entity_name("user_account"), "User_account");
}

#[test]
fn test_property_name_strips_field_prefix() {
    let convert = snake_convert();
    assert_eq!(convert.property_name("f_USER_NAME"), "user_name");
    assert_eq!(convert.property_name("created_at"), "created_at");
}

#[test]
fn test_property_name_no_change_keeps_raw() {
    let convert = DefaultNameConvert::new(
        StrategyConfig::new(),
        NamingStrategy::NoChange,
        NamingStrategy::NoChange,
    );
    assert_eq!(convert.property_name("USER_NAME"), "USER_NAME");
}
