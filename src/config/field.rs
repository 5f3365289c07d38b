use crate::error::{Result, WzError};

/// One entry of the configuration record, with its CLI flag, prompt and rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    ClientId,
    ClientSecret,
    UserId,
    Password,
    XsuaaUrl,
    WorkzoneHost,
    Subdomain,
    SubaccountId,
}

impl ConfigField {
    /// All fields in the order `init` prompts for them.
    pub const ALL: [ConfigField; 8] = [
        ConfigField::ClientId,
        ConfigField::ClientSecret,
        ConfigField::UserId,
        ConfigField::Password,
        ConfigField::XsuaaUrl,
        ConfigField::WorkzoneHost,
        ConfigField::Subdomain,
        ConfigField::SubaccountId,
    ];

    /// Long flag name without the leading dashes.
    pub fn flag(self) -> &'static str {
        match self {
            ConfigField::ClientId => "client-id",
            ConfigField::ClientSecret => "client-secret",
            ConfigField::UserId => "user-id",
            ConfigField::Password => "password",
            ConfigField::XsuaaUrl => "xsuaa-url",
            ConfigField::WorkzoneHost => "workzone-host",
            ConfigField::Subdomain => "subdomain",
            ConfigField::SubaccountId => "subaccount-id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfigField::ClientId => "Client ID",
            ConfigField::ClientSecret => "Client Secret",
            ConfigField::UserId => "User ID",
            ConfigField::Password => "User Password",
            ConfigField::XsuaaUrl => "XSUAA URL",
            ConfigField::WorkzoneHost => "Work Zone Host",
            ConfigField::Subdomain => "Subdomain",
            ConfigField::SubaccountId => "Subaccount ID",
        }
    }

    pub fn prompt(self) -> String {
        match self {
            ConfigField::XsuaaUrl => {
                "XSUAA URL (e.g., https://<subdomain>.authentication.<region>.hana.ondemand.com)"
                    .to_string()
            }
            ConfigField::WorkzoneHost => {
                "Work Zone Host (e.g., <subdomain>.dt.launchpad.cfapps.<region>.hana.ondemand.com)"
                    .to_string()
            }
            other => other.label().to_string(),
        }
    }

    /// Secret fields are read with masked input and never echoed.
    pub fn is_secret(self) -> bool {
        matches!(self, ConfigField::ClientSecret | ConfigField::Password)
    }

    /// Value as stored: secrets verbatim, everything else trimmed.
    pub fn normalize(self, input: &str) -> String {
        if self.is_secret() {
            input.to_string()
        } else {
            input.trim().to_string()
        }
    }

    pub fn validate(self, input: &str) -> Result<()> {
        let value = input.trim();
        if value.is_empty() {
            return Err(self.invalid(format!("{} is required", self.label())));
        }

        match self {
            ConfigField::XsuaaUrl if !value.starts_with("https://") => {
                Err(self.invalid("XSUAA URL must start with https://".to_string()))
            }
            ConfigField::WorkzoneHost
                if value.starts_with("https://") || value.starts_with("http://") =>
            {
                Err(self.invalid(
                    "Please provide only the hostname without protocol \
                     (e.g., <subdomain>.dt.launchpad.cfapps.<region>.hana.ondemand.com)"
                        .to_string(),
                ))
            }
            _ => Ok(()),
        }
    }

    fn invalid(self, message: String) -> WzError {
        WzError::Validation {
            field: self.flag(),
            message,
        }
    }
}
