//! Tests for the dataset assembly pipeline


use crate::app::models::Additive;

/// Create a record with `field_count` descriptive fields populated
pub fn record_with_richness(code: &str, field_count: usize) -> Additive {
    let mut record = Additive::new(code);
    let fields: [&mut String; 5] = [
        &mut record.name,
        &mut record.description,
        &mut record.function,
        &mut record.origin,
        &mut record.usage,
    ];
    for (i, field) in fields.into_iter().enumerate() {
        if i >= field_count {
            break;
        }
        *field = format!("value {}", i);
    }
    record
}
