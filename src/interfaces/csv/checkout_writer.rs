use crate::domain::session::CreateSessionResult;
use crate::domain::state::PaymentState;
use crate::error::Result;
use crate::infrastructure::in_memory::PaymentRecord;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

/// One output line: where an order's payment stands.
#[derive(Debug, Serialize, PartialEq)]
pub struct CheckoutRow {
    pub order_number: String,
    pub provider_ref: Option<String>,
    pub redirect_url: Option<String>,
    pub state: PaymentState,
}

const HEADER: [&str; 4] = ["order_number", "provider_ref", "redirect_url", "state"];

/// Writes the final payment state of each order as CSV.
pub struct CheckoutWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CheckoutWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(sink),
        }
    }

    /// Writes the header, then one row per record joined with the session
    /// opened for it. The header is written even when there are no records.
    pub fn write_checkouts(
        &mut self,
        records: Vec<(String, PaymentRecord)>,
        sessions: &HashMap<String, CreateSessionResult>,
    ) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for (order_number, record) in records {
            let session = sessions.get(&order_number);
            let row = CheckoutRow {
                provider_ref: record.provider_ref,
                redirect_url: session.map(|s| s.redirect_url().to_string()),
                state: record.state,
                order_number,
            };
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_checkouts() {
        let records = vec![(
            "ORD-001".to_string(),
            PaymentRecord {
                state: PaymentState::PartiallyRefunded,
                provider_ref: Some("cs_000001".to_string()),
                history: vec![PaymentState::Pending, PaymentState::PartiallyRefunded],
            },
        )];
        let mut sessions = HashMap::new();
        sessions.insert(
            "ORD-001".to_string(),
            CreateSessionResult::new("https://pay/cs_000001", "cs_000001"),
        );

        let mut out = Vec::new();
        CheckoutWriter::new(&mut out)
            .write_checkouts(records, &sessions)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "order_number,provider_ref,redirect_url,state\n\
             ORD-001,cs_000001,https://pay/cs_000001,partially_refunded\n"
        );
    }

    #[test]
    fn test_header_written_without_records() {
        let mut out = Vec::new();
        CheckoutWriter::new(&mut out)
            .write_checkouts(Vec::new(), &HashMap::new())
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "order_number,provider_ref,redirect_url,state\n"
        );
    }
}
