//! This module provides reusable test utilities:
//! - Mock HTTP servers (inventory, tracker)
//! - Test configuration builders
//! - Common test data

// Not every test binary uses every fixture
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_foreman;
pub mod mock_jira;
pub mod test_config;
pub mod test_data;

// Re-export commonly used items
pub use mock_foreman::MockForemanServer;
pub use mock_jira::MockJiraServer;
pub use test_config::TestConfigBuilder;
pub use test_data::*;
