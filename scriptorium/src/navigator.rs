use scriptorium_client::Navigator;
use url::Url;

/// Points the user at the web login page when the session expires
#[derive(Debug, Clone)]
pub struct TerminalNavigator {
    login_url: Url,
}

impl TerminalNavigator {
    pub fn new(host: &Url, login_path: &str) -> anyhow::Result<Self> {
        let login_url = host
            .join(login_path)
            .map_err(|e| anyhow::anyhow!("invalid login path '{login_path}': {e}"))?;

        Ok(Self { login_url })
    }

    pub const fn login_url(&self) -> &Url {
        &self.login_url
    }
}

impl Navigator for TerminalNavigator {
    fn redirect_to_login(&self) {
        tracing::debug!(login_url = %self.login_url, "redirecting to login");
        eprintln!(
            "Session expired. Sign in at {} and run `scriptorium login --token <TOKEN>`",
            self.login_url
        );
    }
}
