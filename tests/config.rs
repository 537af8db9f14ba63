// ABOUTME: Integration tests for configuration parsing and validation.
// ABOUTME: Tests YAML parsing, password resolution, discovery, and destination merging.

use crxdeploy::config::*;
use crxdeploy::console::VersionedNodePolicy;
use crxdeploy::error::Error;
use std::time::Duration;

const MINIMAL: &str = r#"
server: http://localhost:4502/crx
login: admin
password: admin
package: target/site.zip
"#;

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let config = Config::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.server.prefix(), "/crx");
        assert_eq!(config.workspace, "crx.default");
        assert_eq!(config.package.file_name(), "site.zip");
        assert!(config.install_path.is_none());
        assert!(!config.acl_ignore);
        assert!(!config.skip);
        assert!(!config.skip_install);
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
server: http://author.example.com:4502/crx/
workspace: crx.custom
login: deployer
password:
  env: CRX_PASSWORD
  default: secret
package: dist/site-1.2.zip
install_path: /etc/packages/site
delete_paths: "/apps/site/components, /apps/site/templates; /etc/designs/site"
acl_ignore: true
skip_install: true
backup:
  enabled: true
  folder: archives
connect_timeout: 10s
versioned_nodes: delete
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.server.port(), 4502);
        assert_eq!(config.server.prefix(), "/crx");
        assert_eq!(config.workspace, "crx.custom");
        assert_eq!(config.install_path.as_deref(), Some("/etc/packages/site"));
        let paths = config.delete_paths.unwrap();
        assert_eq!(paths.groups().count(), 2);
        assert_eq!(paths.len(), 3);
        assert!(config.acl_ignore);
        assert!(config.backup.enabled);
        assert!(!config.backup.only);
        assert_eq!(config.backup.folder.to_str(), Some("archives"));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.versioned_nodes, VersionedNodePolicy::Delete);
    }

    #[test]
    fn https_server_is_accepted() {
        let yaml = MINIMAL.replace("http://localhost:4502", "https://localhost");
        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.server.scheme(), "https");
        assert_eq!(config.server.port(), 443);
    }

    #[test]
    fn unsupported_scheme_is_rejected() {
        let yaml = MINIMAL.replace("http://", "ftp://");
        assert!(matches!(Config::from_yaml(&yaml), Err(Error::Yaml(_))));
    }

    #[test]
    fn invalid_delete_path_entry_is_rejected() {
        let yaml = format!("{MINIMAL}delete_paths: \"/apps/a,apps/b\"\n");
        assert!(Config::from_yaml(&yaml).is_err());
    }

    #[test]
    fn empty_delete_paths_are_inactive() {
        let yaml = format!("{MINIMAL}delete_paths: \"\"\n");
        assert!(Config::from_yaml(&yaml).unwrap().delete_paths.is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let yaml = format!("{MINIMAL}pasword: typo\n");
        assert!(Config::from_yaml(&yaml).is_err());
    }
}

mod passwords {
    use super::*;

    const ENV_CONFIG: &str = r#"
server: http://localhost:4502
login: admin
password:
  env: CRXDEPLOY_TEST_PASSWORD
package: site.zip
"#;

    #[test]
    fn password_is_read_from_environment() {
        temp_env::with_var("CRXDEPLOY_TEST_PASSWORD", Some("from-env"), || {
            let config = Config::from_yaml(ENV_CONFIG).unwrap();
            let credentials = config.credentials().unwrap();
            assert_eq!(credentials.login, "admin");
            assert!(!format!("{credentials:?}").contains("from-env"));
        });
    }

    #[test]
    fn missing_password_variable_is_an_error() {
        temp_env::with_var_unset("CRXDEPLOY_TEST_PASSWORD", || {
            let config = Config::from_yaml(ENV_CONFIG).unwrap();
            assert!(matches!(
                config.credentials(),
                Err(Error::MissingEnvVar(var)) if var == "CRXDEPLOY_TEST_PASSWORD"
            ));
        });
    }
}

mod destinations {
    use super::*;

    fn with_destinations() -> Config {
        let yaml = format!(
            r#"{MINIMAL}
destinations:
  publish:
    server: http://publish.example.com:4503
    install_path: /etc/packages/publish
  staging:
    login: stager
"#
        );
        Config::from_yaml(&yaml).unwrap()
    }

    #[test]
    fn destination_overrides_server_and_install_path() {
        let config = with_destinations().for_destination("publish").unwrap();
        assert_eq!(config.server.host(), "publish.example.com");
        assert_eq!(config.server.port(), 4503);
        assert_eq!(config.install_path.as_deref(), Some("/etc/packages/publish"));
        assert_eq!(config.login, "admin");
    }

    #[test]
    fn destination_keeps_unset_fields() {
        let config = with_destinations().for_destination("staging").unwrap();
        assert_eq!(config.login, "stager");
        assert_eq!(config.server.host(), "localhost");
    }

    #[test]
    fn unknown_destination_is_an_error() {
        assert!(matches!(
            with_destinations().for_destination("prod"),
            Err(Error::UnknownDestination(name)) if name == "prod"
        ));
    }
}

mod discovery {
    use super::*;

    #[test]
    fn discovers_alternate_file_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".crxdeploy")).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME_DIR), MINIMAL).unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.login, "admin");
    }

    #[test]
    fn missing_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::discover(dir.path()),
            Err(Error::ConfigNotFound(_))
        ));
    }

    #[test]
    fn init_then_discover() {
        let dir = tempfile::tempdir().unwrap();
        init_config(dir.path(), Some("http://author:4502/crx"), Some("out/app.zip"), false).unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.server.host(), "author");
        assert_eq!(config.package.file_name(), "app.zip");
        assert!(matches!(
            init_config(dir.path(), None, None, false),
            Err(Error::AlreadyExists(_))
        ));
        init_config(dir.path(), None, None, true).unwrap();
    }
}

mod overrides {
    use super::*;

    #[test]
    fn cli_overrides_switch_behaviour_on() {
        let config = Config::from_yaml(MINIMAL)
            .unwrap()
            .with_overrides(&Overrides {
                package: Some("other/next.zip".into()),
                skip_install: true,
                backup: true,
                backup_only: false,
            })
            .unwrap();
        assert_eq!(config.package.file_name(), "next.zip");
        assert!(config.skip_install);
        assert!(config.backup.enabled);
        assert!(!config.backup.only);
    }
}
