use tracing::debug;

use crate::extractor::error::ExtractError;
use crate::extractor::fields::required_text;
use crate::extractor::selector::ResourceBlock;
use crate::generator::records::IamRecord;

/// Build one record per membership binding, numbered in block order.
///
/// A block without `role` or `member` fails the whole extraction.
pub fn normalize_iam(blocks: &[ResourceBlock<'_>]) -> Result<Vec<IamRecord>, ExtractError> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let address = block.address();
            let record = IamRecord {
                no: index + 1,
                role: required_text(block.body, "role", &address)?.to_string(),
                member: required_text(block.body, "member", &address)?.to_string(),
            };
            debug!(
                resource = %address,
                no = record.no,
                role = %record.role,
                member = %record.member,
                "iam record"
            );
            Ok(record)
        })
        .collect()
}
