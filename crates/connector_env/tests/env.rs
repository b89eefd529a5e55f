use connector_env::Env;

#[test]
fn env_parses_from_run_env_values() {
    assert!(matches!("Development".parse::<Env>(), Ok(Env::Development)));
    assert!(matches!("Sandbox".parse::<Env>(), Ok(Env::Sandbox)));
    assert!(matches!("Production".parse::<Env>(), Ok(Env::Production)));
    assert!("staging".parse::<Env>().is_err());
}

#[test]
fn env_selects_its_config_file() {
    assert_eq!(Env::Development.config_file(), "development.toml");
    assert_eq!(Env::Production.config_file(), "production.toml");
}
