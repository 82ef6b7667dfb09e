//! Direct-sow start-date back-dating.

use chrono::Duration;

use crate::models::PlantingRecord;

/// Back-date direct-sow records so their bar has a visible width.
///
/// Every `DirectSow` record gets `start_date = end_date - days`, overwriting
/// whatever start date was parsed. A missing end date, or an offset outside
/// the representable range, leaves the start date missing. Other methods are
/// untouched.
pub fn adjust_direct_sow(records: Vec<PlantingRecord>, days: i64) -> Vec<PlantingRecord> {
    let offset = Duration::try_days(days);
    if offset.is_none() {
        log::warn!("Direct-sow offset of {} days is out of range", days);
    }
    records
        .into_iter()
        .map(|mut record| {
            if record.planting_method.is_direct_sow() {
                record.start_date = record
                    .end_date
                    .zip(offset)
                    .and_then(|(end, offset)| end.checked_sub_signed(offset));
            }
            record
        })
        .collect()
}
