use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_parent_traversal_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("LS_STORAGE_FILE", "../storage.json");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_absolute_path_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("LS_STORAGE_FILE", "/tmp/storage.json");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_empty_file_name_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("LS_STORAGE_FILE", "  ");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_nested_relative_path_when_validate_then_ok() {
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("LS_STORAGE_FILE", "profiles/admin.json");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), ok(anything()));
}
