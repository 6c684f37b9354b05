use crate::types::{BridgeTransfer, TransferKey};
use std::collections::HashMap;

/// Initiated transfers without a matching finalization.
///
/// Matching is by [`TransferKey`] with multiplicity: two identical deposits
/// need two finalizations. Earlier initiations are matched first, so the
/// result keeps the most recent unmatched ones.
pub fn reconcile(
    mut initiated: Vec<BridgeTransfer>,
    finalized: &[BridgeTransfer],
) -> Vec<BridgeTransfer> {
    let mut remaining: HashMap<TransferKey, usize> = HashMap::new();
    for transfer in finalized {
        *remaining.entry(transfer.key()).or_default() += 1;
    }

    initiated.sort_by_key(|t| t.block_number);
    initiated
        .into_iter()
        .filter(|transfer| match remaining.get_mut(&transfer.key()) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .collect()
}
