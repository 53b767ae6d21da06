use claims::assert_ok;
use entry_point::configuration;

#[test]
fn bundled_configuration_is_readable() {
    let settings = assert_ok!(configuration::get_configuration());
    assert_eq!(settings.application.name, "entry-point");
    assert!(settings.verifier.credentials_file.exists());
}
