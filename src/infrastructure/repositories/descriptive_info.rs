//! Config-backed descriptive info repository
//!
//! Serves the `[collections."<name>"]` tables of the loaded configuration.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::domain::ports::DescriptiveInfoLookup;
use crate::domain::value_objects::DescriptiveInfo;

#[derive(Debug, Clone, Default)]
pub struct ConfigDescriptiveInfoRepository {
    infos: BTreeMap<String, DescriptiveInfo>,
}

impl ConfigDescriptiveInfoRepository {
    pub fn new(infos: BTreeMap<String, DescriptiveInfo>) -> Self {
        Self { infos }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.collections.clone())
    }
}

impl DescriptiveInfoLookup for ConfigDescriptiveInfoRepository {
    fn lookup(&self, name: &str) -> Option<DescriptiveInfo> {
        self.infos.get(name).cloned()
    }
}
