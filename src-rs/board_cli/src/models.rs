use taskboard_rs::ClientConfig;

#[derive(Clone, Debug)]
pub struct CLIConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
}

impl CLIConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
