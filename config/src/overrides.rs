use config::{
    Map,
    Source,
    Value,
};
use std::collections::HashMap;

/// Command-line values that take precedence over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub listen_address: Option<String>,
    pub log_level: Option<String>,
}

impl Source for Overrides {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new((*self).clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        let mut cache = HashMap::<String, Value>::new();
        if let Some(listen_address) = &self.listen_address {
            cache.insert("listen-address".to_string(), listen_address.clone().into());
        }
        if let Some(log_level) = &self.log_level {
            cache.insert("log.level".to_string(), log_level.clone().into());
        }
        Ok(cache)
    }
}
