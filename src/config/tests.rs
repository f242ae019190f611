use super::settings::Settings;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.broker.inbound_capacity, 1000);
    assert_eq!(settings.broker.consumer_capacity, 10);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_load_config_falls_back_to_defaults() {
    let settings = super::load_config().expect("load config");
    assert_eq!(settings.broker.inbound_capacity, 1000);
    assert_eq!(settings.broker.consumer_capacity, 10);
    assert_eq!(settings.logging.level, "info");
}
