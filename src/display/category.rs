//! Category display formatting

use crate::models::TransactionKind;

/// Numbered list of the labels for one kind, indices as `rename` expects them
pub fn format_category_list(kind: TransactionKind, labels: &[String]) -> String {
    let mut output = format!("{} categories:\n", kind);
    if labels.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    for (index, label) in labels.iter().enumerate() {
        output.push_str(&format!("  {:>2}. {}\n", index, label));
    }
    output
}
