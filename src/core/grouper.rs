use crate::config::RunConfig;
use crate::core::{ApiGroups, Record};
use crate::utils::error::Result;

/// Partition records by API name.
///
/// Groups come out in the order their API was first seen and each group keeps
/// the relative order of its records.
pub fn split_apis(records: Vec<Record>, config: &RunConfig) -> Result<ApiGroups> {
    let mut apis = ApiGroups::new();
    for record in records {
        let api_name = record.require(&config.columns.api_name)?.to_string();
        apis.entry(api_name).or_default().push(record);
    }

    for (api, rows) in &apis {
        tracing::debug!("{} has {} analytics entries", api, rows.len());
    }
    Ok(apis)
}
