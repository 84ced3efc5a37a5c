//! Canonical signing-string construction.

use std::collections::HashMap;

/// Separator between `name=value` pairs in the canonical string.
const FIELD_SEPARATOR: &str = ",";

/// Field order for the payment request signature.
///
/// The gateway signs only these three fields; the secondary charge fields
/// travel unsigned. The order is part of the wire contract.
pub const PAYMENT_SIGNED_FIELDS: &[&str] = &["total_amount", "transaction_uuid", "product_code"];

/// An ordered set of field names covered by a signature.
///
/// The order determines the canonical string layout and must exactly match
/// the `signed_field_names` list transmitted with the payload - a mismatch
/// silently produces a signature the gateway rejects. Immutable once defined
/// for a request type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedFieldSet {
    names: &'static [&'static str],
}

impl SignedFieldSet {
    /// Creates a field set over the given names.
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    /// The field set signed on outbound payment requests.
    pub const fn payment_request() -> Self {
        Self::new(PAYMENT_SIGNED_FIELDS)
    }

    /// Returns the field names in signing order.
    pub fn names(&self) -> &[&'static str] {
        self.names
    }

    /// Comma-joined name list, transmitted alongside the signature so the
    /// verifier knows what was signed.
    pub fn joined(&self) -> String {
        self.names.join(FIELD_SEPARATOR)
    }

    /// Builds the canonical `name1=value1,name2=value2,...` string in
    /// declaration order. Names absent from `values` contribute an empty
    /// value. Total over any input, side-effect free.
    pub fn canonical_string(&self, values: &HashMap<&str, String>) -> String {
        self.names
            .iter()
            .map(|name| {
                let value = values.get(name).map(String::as_str).unwrap_or("");
                format!("{name}={value}")
            })
            .collect::<Vec<_>>()
            .join(FIELD_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_declared_field_order() {
        let fields = SignedFieldSet::new(&["b", "a", "c"]);
        let mut values = HashMap::new();
        values.insert("a", "1".to_string());
        values.insert("b", "2".to_string());
        values.insert("c", "3".to_string());

        assert_eq!(fields.canonical_string(&values), "b=2,a=1,c=3");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let fields = SignedFieldSet::payment_request();
        let mut values = HashMap::new();
        values.insert("total_amount", "100".to_string());

        assert_eq!(
            fields.canonical_string(&values),
            "total_amount=100,transaction_uuid=,product_code="
        );
    }

    #[test]
    fn empty_field_set_yields_empty_string() {
        let fields = SignedFieldSet::new(&[]);
        assert_eq!(fields.canonical_string(&HashMap::new()), "");
        assert_eq!(fields.joined(), "");
    }

    #[test]
    fn payment_request_wire_format() {
        let fields = SignedFieldSet::payment_request();
        let mut values = HashMap::new();
        values.insert("total_amount", "100".to_string());
        values.insert("transaction_uuid", "11-201-13".to_string());
        values.insert("product_code", "EPAYTEST".to_string());

        assert_eq!(
            fields.canonical_string(&values),
            "total_amount=100,transaction_uuid=11-201-13,product_code=EPAYTEST"
        );
        assert_eq!(fields.joined(), "total_amount,transaction_uuid,product_code");
    }
}
